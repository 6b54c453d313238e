use crate::client::http::Transport;
use crate::core::error::CliError;
use crate::core::printer::Printer;
use colored::Colorize;
use dialoguer::console::Term;
use dialoguer::{Confirm, Input};
use std::io;
use tinytina_lib::{build_fetch_options, build_form, Answers, Error, FieldKind, Form, Request, State};

/// Terminal interaction used by the interactive loop.
pub trait Prompter {
    fn input(&mut self, label: &str, initial: &str) -> Result<String, Error>;
    fn confirm(&mut self, message: &str) -> Result<bool, Error>;
    fn note(&mut self, text: &str);
}

/// dialoguer prompts on stderr, keeping stdout for responses.
pub struct TerminalPrompter {
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, label: &str, initial: &str) -> Result<String, Error> {
        Input::<String>::new()
            .with_prompt(label)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map_err(prompt_error)
    }

    fn confirm(&mut self, message: &str) -> Result<bool, Error> {
        let answer = Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact_on_opt(&self.term)
            .map_err(prompt_error)?;
        Ok(answer.unwrap_or(false))
    }

    fn note(&mut self, text: &str) {
        let _ = self.term.write_line(text);
    }
}

fn prompt_error(err: dialoguer::Error) -> Error {
    #[allow(unreachable_patterns)]
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => Error::UserCancelled,
        dialoguer::Error::IO(e) => Error::Io(e),
        _ => Error::UserCancelled,
    }
}

/// Walks the form, asking for every input field.
pub fn ask<P: Prompter>(prompter: &mut P, form: &Form) -> Result<Answers, Error> {
    prompter.note(&form.message.bold().to_string());

    let mut answers = Answers::new();
    for field in &form.fields {
        match field.kind {
            FieldKind::Separator => prompter.note(&format!("\n{}", field.label.bold())),
            FieldKind::ReadOnly => {
                prompter.note(&format!("{}: {}", field.label, field.initial.dimmed()))
            }
            FieldKind::Input => {
                let value = prompter.input(&field.label, &field.initial)?;
                answers.insert(field.key.clone(), value);
            }
        }
    }
    Ok(answers)
}

/// Prompt, send, and offer to repeat with the edited request until the user
/// declines.
pub async fn run<T: Transport, P: Prompter>(
    state: &State,
    request: &Request,
    transport: &T,
    prompter: &mut P,
    printer: Printer,
) -> Result<(), CliError> {
    let mut current = request.clone();

    loop {
        let form = build_form(state, &current)?;
        let answers = ask(prompter, &form)?;
        current = form.into_request(&answers);

        let options = build_fetch_options(&state.env, &current);
        tracing::debug!(url = %options.full_url(), "sending edited request");
        let response = transport.send(options).await?;
        printer.print(&response.body);

        if !prompter.confirm("Repeat request")? {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::http::{HttpError, HttpResponse};
    use indexmap::IndexMap;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tinytina_lib::{FetchOptions, Schema, StateOptions};

    struct ScriptedPrompter {
        inputs: IndexMap<String, String>,
        repeats: VecDeque<bool>,
        cancel_on: Option<String>,
        asked: Vec<String>,
    }

    impl ScriptedPrompter {
        fn new(inputs: &[(&str, &str)], repeats: &[bool]) -> Self {
            Self {
                inputs: inputs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                repeats: repeats.iter().copied().collect(),
                cancel_on: None,
                asked: Vec::new(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn input(&mut self, label: &str, initial: &str) -> Result<String, Error> {
            if self.cancel_on.as_deref() == Some(label) {
                return Err(Error::UserCancelled);
            }
            self.asked.push(label.to_string());
            Ok(self
                .inputs
                .get(label)
                .cloned()
                .unwrap_or_else(|| initial.to_string()))
        }

        fn confirm(&mut self, _message: &str) -> Result<bool, Error> {
            Ok(self.repeats.pop_front().unwrap_or(false))
        }

        fn note(&mut self, _text: &str) {}
    }

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<FetchOptions>>,
    }

    impl Transport for RecordingTransport {
        async fn send(&self, options: FetchOptions) -> Result<HttpResponse, HttpError> {
            self.sent.lock().unwrap().push(options);
            Ok(HttpResponse {
                status: 200,
                headers: IndexMap::new(),
                body: "ok".to_string(),
            })
        }
    }

    fn fixture() -> (State, Request) {
        let schema: Schema = serde_json::from_value(serde_json::json!({
            "hide": ["token"],
            "globals": { "token": "secret", "host": "http://localhost" },
            "collections": [{
                "id": "users",
                "requests": [{
                    "id": "create",
                    "url": "{host}/users",
                    "headers": [{ "name": "Authorization", "value": "{token}" }],
                    "data": [{ "name": "name", "value": "tina" }]
                }]
            }]
        }))
        .unwrap();
        let state = State::new(schema, "dev", StateOptions::default()).unwrap();
        let request = state.collection[0].requests[0].clone();
        (state, request)
    }

    #[tokio::test]
    async fn test_edited_request_is_sent_with_hidden_values_restored() {
        let (state, request) = fixture();
        let transport = RecordingTransport::default();
        let mut prompter = ScriptedPrompter::new(&[("name", "someone")], &[]);

        run(&state, &request, &transport, &mut prompter, Printer::plain())
            .await
            .unwrap();

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "http://localhost/users");
        assert_eq!(sent[0].opts.headers["Authorization"], "secret");
        assert_eq!(
            serde_json::to_value(&sent[0].body).unwrap(),
            serde_json::json!({ "name": "someone" })
        );
        assert_eq!(prompter.asked, vec!["URL", "Method", "Authorization", "name"]);
    }

    #[tokio::test]
    async fn test_repeat_reuses_the_edited_request() {
        let (state, request) = fixture();
        let transport = RecordingTransport::default();
        let mut prompter = ScriptedPrompter::new(&[("Method", "put")], &[true, false]);

        run(&state, &request, &transport, &mut prompter, Printer::plain())
            .await
            .unwrap();

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().all(|o| o.method().as_str() == "PUT"));
    }

    #[tokio::test]
    async fn test_cancel_stops_before_sending() {
        let (state, request) = fixture();
        let transport = RecordingTransport::default();
        let mut prompter = ScriptedPrompter::new(&[], &[]);
        prompter.cancel_on = Some("Method".to_string());

        let err = run(&state, &request, &transport, &mut prompter, Printer::plain())
            .await
            .unwrap_err();

        assert!(err.is_cancelled());
        assert!(transport.sent.lock().unwrap().is_empty());
    }
}
