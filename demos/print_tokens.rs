//! Scan the sample configuration and print each token.

use confscan::Scanner;

fn main() {
    let code = "#var:struct MyStruct { int x; int y; x = 10; y = 20; } subclusive:#";

    for result in Scanner::new(code) {
        match result {
            Ok(token) => println!("{token}"),
            Err(e) => {
                eprintln!("error: {e}");
                break;
            }
        }
    }
}
