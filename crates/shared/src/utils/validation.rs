use std::collections::BTreeSet;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Distinct messages from (possibly nested) validation errors.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = BTreeSet::new();
    collect(errors, &mut messages);
    messages.into_iter().collect()
}

fn collect(errors: &ValidationErrors, out: &mut BTreeSet<String>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid {field}"));
                    out.insert(message);
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, out),
            ValidationErrorsKind::List(items) => {
                for inner in items.values() {
                    collect(inner, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::{CartItemRequest, CreateOrderRequest, RegisterRequest};
    use validator::Validate;

    #[test]
    fn repeated_messages_collapse() {
        let errors = RegisterRequest::default().validate().unwrap_err();
        assert_eq!(validation_messages(&errors), vec!["All fields required"]);
    }

    #[test]
    fn nested_cart_errors_surface() {
        let req = CreateOrderRequest {
            cart_items: vec![CartItemRequest {
                id: "x".into(),
                quantity: 0,
                ..Default::default()
            }],
            ..Default::default()
        };

        let errors = req.validate().unwrap_err();
        assert_eq!(
            validation_messages(&errors),
            vec!["Quantity must be at least 1"]
        );
    }
}
