//! Terminal input parsing into storefront commands.

use shared::{
    domain::{NotificationId, NotificationKind, Rupees},
    protocol::{FormFields, UiCommand},
};
use thiserror::Error;

pub enum UiInput {
    Command(UiCommand),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}'; type 'help'")]
    UnknownCommand(String),
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("'{value}' is not a valid {what}")]
    InvalidNumber { what: &'static str, value: String },
}

pub const HELP: &str = "\
open <product>            open the order modal for a catalog product
qty <+n|-n>               change the order quantity
submit key=value ...      submit the order form (fullName, phone, address, city, state, pincode, paymentMethod)
close | esc               close the order modal
cart <price> <product>    add a product to the cart
notify <success|error> <message>
dismiss <id>              close a notification early
filter <category|all>     filter product cards
contact key=value ...     submit the contact form
wait <ms>                 jump the clock forward
show                      print the page regions
quit";

pub fn parse_line(line: &str) -> Result<Option<UiInput>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "open" => UiCommand::OpenProduct {
            name: required(rest, "open", "a product name")?.to_string(),
        },
        "qty" | "quantity" => UiCommand::ChangeQuantity {
            delta: parse_number(required(rest, "qty", "a delta such as +1")?, "quantity delta")?,
        },
        "submit" => UiCommand::SubmitOrder {
            fields: parse_fields(rest),
        },
        "close" | "esc" | "escape" => UiCommand::CloseOrder,
        "cart" => {
            let args = required(rest, "cart", "a price and a product name")?;
            let (price, name) = args.split_once(char::is_whitespace).ok_or(
                ParseError::MissingArgument {
                    command: "cart",
                    expected: "a price and a product name",
                },
            )?;
            UiCommand::AddToCart {
                name: name.trim().to_string(),
                price: Rupees(parse_number(price, "price")?),
            }
        }
        "notify" => {
            let args = required(rest, "notify", "a kind and a message")?;
            let (kind, message) = args.split_once(char::is_whitespace).unwrap_or((args, ""));
            let kind = match kind.to_ascii_lowercase().as_str() {
                "error" => NotificationKind::Error,
                _ => NotificationKind::Success,
            };
            UiCommand::Notify {
                message: message.trim().to_string(),
                kind,
            }
        }
        "dismiss" => UiCommand::Dismiss {
            id: NotificationId(parse_number(
                required(rest, "dismiss", "a notification id")?,
                "notification id",
            )?),
        },
        "filter" => UiCommand::FilterProducts {
            category: required(rest, "filter", "a category")?.to_string(),
        },
        "contact" => UiCommand::SubmitContact {
            fields: parse_fields(rest),
        },
        "wait" => UiCommand::Advance {
            ms: parse_number(required(rest, "wait", "milliseconds")?, "duration")?,
        },
        "show" => return Ok(Some(UiInput::Show)),
        "help" | "?" => return Ok(Some(UiInput::Help)),
        "quit" | "exit" => return Ok(Some(UiInput::Quit)),
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(Some(UiInput::Command(command)))
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument { command, expected })
    } else {
        Ok(rest)
    }
}

fn parse_number<T: std::str::FromStr>(raw: &str, what: &'static str) -> Result<T, ParseError> {
    let raw = raw.trim();
    raw.strip_prefix('+')
        .unwrap_or(raw)
        .parse()
        .map_err(|_| ParseError::InvalidNumber {
            what,
            value: raw.to_string(),
        })
}

/// `key=value` pairs; bare words continue the previous value so
/// `fullName=Asha Verma city=Pune` keeps the space in the name.
pub fn parse_fields(raw: &str) -> FormFields {
    let mut fields = FormFields::new();
    let mut current: Option<String> = None;
    for token in raw.split_whitespace() {
        match token.split_once('=') {
            Some((key, value)) => {
                fields.insert(key.to_string(), value.to_string());
                current = Some(key.to_string());
            }
            None => {
                if let Some(value) = current.as_ref().and_then(|key| fields.get_mut(key)) {
                    if !value.is_empty() {
                        value.push(' ');
                    }
                    value.push_str(token);
                }
            }
        }
    }
    fields
}

#[cfg(test)]
#[path = "../tests/events_tests.rs"]
mod tests;
