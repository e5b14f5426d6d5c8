use super::*;

fn command(line: &str) -> UiCommand {
    match parse_line(line) {
        Ok(Some(UiInput::Command(command))) => command,
        _ => panic!("expected a command for '{line}'"),
    }
}

#[test]
fn open_keeps_multi_word_product_names() {
    assert_eq!(
        command("open Herbal Tea"),
        UiCommand::OpenProduct {
            name: "Herbal Tea".into()
        }
    );
}

#[test]
fn quantity_accepts_signed_deltas() {
    assert_eq!(command("qty +2"), UiCommand::ChangeQuantity { delta: 2 });
    assert_eq!(command("qty -1"), UiCommand::ChangeQuantity { delta: -1 });
    assert_eq!(
        parse_line("qty lots").err(),
        Some(ParseError::InvalidNumber {
            what: "quantity delta",
            value: "lots".into()
        })
    );
}

#[test]
fn submit_fields_keep_spaces_in_values() {
    let UiCommand::SubmitOrder { fields } =
        command("submit fullName=Asha Verma address=12 MG Road city=Pune")
    else {
        panic!("expected submit");
    };
    assert_eq!(fields.get("fullName").map(String::as_str), Some("Asha Verma"));
    assert_eq!(fields.get("address").map(String::as_str), Some("12 MG Road"));
    assert_eq!(fields.get("city").map(String::as_str), Some("Pune"));
}

#[test]
fn cart_takes_price_then_name() {
    assert_eq!(
        command("cart 499 Ayurvedic Kit"),
        UiCommand::AddToCart {
            name: "Ayurvedic Kit".into(),
            price: Rupees(499)
        }
    );
}

#[test]
fn escape_closes_the_modal() {
    assert_eq!(command("esc"), UiCommand::CloseOrder);
}

#[test]
fn blank_lines_and_unknown_verbs() {
    assert!(matches!(parse_line("   "), Ok(None)));
    assert!(matches!(parse_line("quit"), Ok(Some(UiInput::Quit))));
    assert_eq!(
        parse_line("checkout").err(),
        Some(ParseError::UnknownCommand("checkout".into()))
    );
    assert_eq!(
        parse_line("open").err(),
        Some(ParseError::MissingArgument {
            command: "open",
            expected: "a product name"
        })
    );
}
