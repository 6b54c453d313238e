use crate::error::{Error, Result};
use crate::schema::{Pair, Request, RequestData};
use crate::state::State;
use indexmap::IndexMap;
use serde::Serialize;

const SECTIONS: [(&str, &str); 4] = [
    ("headers", "Headers"),
    ("query", "Query"),
    ("data", "Data"),
    ("files", "Files"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Separator,
    ReadOnly,
    Input,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormField {
    pub key: String,
    pub label: String,
    pub initial: String,
    pub kind: FieldKind,
}

impl FormField {
    fn separator(label: &str) -> Self {
        Self {
            key: String::new(),
            label: label.to_string(),
            initial: String::new(),
            kind: FieldKind::Separator,
        }
    }

    fn input(key: String, label: &str, initial: String) -> Self {
        Self {
            key,
            label: label.to_string(),
            initial,
            kind: FieldKind::Input,
        }
    }
}

/// Editable view of a request shown before it is sent interactively.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Form {
    pub message: String,
    pub fields: Vec<FormField>,
    #[serde(skip)]
    template: Request,
}

/// Answers keyed by `FormField::key`.
pub type Answers = IndexMap<String, String>;

/// Builds the form for `request`. Initial values are previews, so hidden
/// variables show up as their placeholders.
pub fn build_form(state: &State, request: &Request) -> Result<Form> {
    let data = match &request.data {
        Some(RequestData::Json(_)) => return Err(Error::FormUnsupported("data".to_string())),
        Some(RequestData::Pairs(pairs)) => Some(pairs.as_slice()),
        None => None,
    };

    let mut fields = vec![
        FormField {
            key: String::new(),
            label: "Env".to_string(),
            initial: format!("{} ✖", state.env_name),
            kind: FieldKind::ReadOnly,
        },
        FormField::input("url".to_string(), "URL", state.preview(&request.url)),
        FormField::input(
            "method".to_string(),
            "Method",
            request.method().to_string(),
        ),
    ];

    for (section, title) in SECTIONS {
        let pairs: Option<&[Pair]> = match section {
            "headers" => Some(request.headers.as_slice()),
            "query" => Some(request.query.as_slice()),
            "data" => data,
            _ => request.files.as_deref(),
        };
        let Some(pairs) = pairs.filter(|p| !p.is_empty()) else {
            continue;
        };

        fields.push(FormField::separator(title));
        for pair in pairs {
            fields.push(FormField::input(
                format!("{section}.{}", pair.name),
                &pair.name,
                state.preview(&pair.value),
            ));
        }
    }

    Ok(Form {
        message: request.title().unwrap_or("Request data:").to_string(),
        fields,
        template: request.clone(),
    })
}

impl Form {
    pub fn inputs(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter().filter(|f| f.kind == FieldKind::Input)
    }

    /// Rebuilds a request from the answers. Fields left unanswered keep their
    /// initial value; identity and download settings come from the original.
    pub fn into_request(&self, answers: &Answers) -> Request {
        let answer = |field: &FormField| {
            answers
                .get(&field.key)
                .cloned()
                .unwrap_or_else(|| field.initial.clone())
        };

        let mut request = Request {
            id: self.template.id.clone(),
            name: self.template.name.clone(),
            description: self.template.description.clone(),
            body_type: self.template.body_type.clone(),
            output: self.template.output.clone(),
            ..Default::default()
        };
        let mut data: Vec<Pair> = Vec::new();
        let mut files: Vec<Pair> = Vec::new();

        for field in self.inputs() {
            let value = answer(field);
            match field.key.as_str() {
                "url" => request.url = value,
                "method" => request.method = Some(value),
                key => {
                    let Some((section, name)) = key.split_once('.') else {
                        continue;
                    };
                    let pair = Pair::new(name, value);
                    match section {
                        "headers" => request.headers.push(pair),
                        "query" => request.query.push(pair),
                        "data" => data.push(pair),
                        "files" => files.push(pair),
                        _ => {}
                    }
                }
            }
        }

        if !data.is_empty() {
            request.data = Some(RequestData::Pairs(data));
        }
        if !files.is_empty() {
            request.files = Some(files);
        }

        request
    }
}
