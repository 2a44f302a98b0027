//! Demonstrate how invalid characters and unterminated strings surface.

use confscan::{Scanner, ScanErrorKind};

fn main() {
    // Invalid characters become tokens; scanning keeps going.
    for result in Scanner::new("port = 80 @ 443;") {
        match result {
            Ok(token) => match token.diagnostic() {
                Some(message) => println!(
                    "  {message} at line {}, column {}",
                    token.span.line, token.span.column
                ),
                None => println!("{token}"),
            },
            Err(e) => println!("Scan error: {e}"),
        }
    }

    println!();

    // An unterminated string stops the scan.
    match confscan::tokenize("name = \"unclosed\n") {
        Ok(tokens) => println!("Scanned {} tokens (unexpected)", tokens.len()),
        Err(e) => {
            println!("Scan error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Location: line {}, column {}", e.span.line, e.span.column);
            assert_eq!(e.kind, ScanErrorKind::UnterminatedString);
        }
    }
}
