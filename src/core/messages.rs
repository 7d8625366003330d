use crate::utils::error::{CartError, Result};
use std::fmt;

/// The cart operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Remove,
    Update,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add_product",
            Operation::Remove => "remove_product",
            Operation::Update => "update_product_amount",
        };
        f.write_str(name)
    }
}

/// Turns a failed operation into the text shown to the user.
pub trait MessagePolicy: Send + Sync {
    fn render(&self, operation: Operation, error: &CartError) -> String;
}

/// Storefront default: one stock message, otherwise one generic message
/// per operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortugueseMessages;

impl MessagePolicy for PortugueseMessages {
    fn render(&self, operation: Operation, error: &CartError) -> String {
        if error.is_out_of_stock() {
            return "Quantidade solicitada fora de estoque".to_string();
        }
        match operation {
            Operation::Add => "Erro na adição do produto",
            Operation::Remove => "Erro na remoção do produto",
            Operation::Update => "Erro na alteração de quantidade do produto",
        }
        .to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishMessages;

impl MessagePolicy for EnglishMessages {
    fn render(&self, operation: Operation, error: &CartError) -> String {
        if error.is_out_of_stock() {
            return "Requested amount is out of stock".to_string();
        }
        match operation {
            Operation::Add => "Could not add the product",
            Operation::Remove => "Could not remove the product",
            Operation::Update => "Could not change the product amount",
        }
        .to_string()
    }
}

pub const SUPPORTED_LOCALES: &[&str] = &["pt-BR", "en"];

pub fn policy_for_locale(locale: &str) -> Result<Box<dyn MessagePolicy>> {
    match locale {
        "pt-BR" => Ok(Box::new(PortugueseMessages)),
        "en" => Ok(Box::new(EnglishMessages)),
        other => Err(CartError::InvalidConfigValueError {
            field: "locale".to_string(),
            value: other.to_string(),
            reason: format!("Supported locales: {}", SUPPORTED_LOCALES.join(", ")),
        }),
    }
}
