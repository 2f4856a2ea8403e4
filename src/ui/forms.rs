//! Form rendering

use super::escape;

/// Input widget for a form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Integer { min: Option<i64>, max: Option<i64> },
    Decimal,
    Date,
    DateTime,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Text, required: true }
    }

    pub const fn integer(name: &'static str, label: &'static str, min: Option<i64>, max: Option<i64>) -> Self {
        Self { name, label, kind: FieldKind::Integer { min, max }, required: true }
    }

    pub const fn decimal(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Decimal, required: true }
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Date, required: true }
    }

    pub const fn datetime(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::DateTime, required: true }
    }

    /// Same field, but may be left blank
    pub const fn optional(self) -> Self {
        Self { required: false, ..self }
    }

    fn render(&self) -> String {
        let attributes = match self.kind {
            FieldKind::Text => r#"type="text""#.to_string(),
            FieldKind::Integer { min, max } => {
                let mut attrs = r#"type="number" step="1""#.to_string();
                if let Some(min) = min {
                    attrs.push_str(&format!(r#" min="{}""#, min));
                }
                if let Some(max) = max {
                    attrs.push_str(&format!(r#" max="{}""#, max));
                }
                attrs
            }
            FieldKind::Decimal => r#"type="number" step="0.01""#.to_string(),
            FieldKind::Date => r#"type="date""#.to_string(),
            FieldKind::DateTime => r#"type="datetime-local""#.to_string(),
        };

        format!(
            r#"<p><label for="{name}">{label}</label> <input id="{name}" name="{name}" {attributes}{required}></p>"#,
            name = self.name,
            label = escape(self.label),
            attributes = attributes,
            required = if self.required { " required" } else { "" },
        )
    }
}

/// POST form with one input per field and a submit button
pub fn render_form(action: &str, fields: &[FormField], submit: &str) -> String {
    let inputs: String = fields.iter().map(FormField::render).collect();
    format!(
        r#"<form method="post" action="{}">
{}<p><button type="submit">{}</button></p>
</form>"#,
        escape(action),
        inputs,
        escape(submit)
    )
}
