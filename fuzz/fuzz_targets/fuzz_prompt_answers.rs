#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;
use termio::{Console, ConsoleError};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as typed answers: prompts must never panic, and a
    // repeating prompt must end once the input runs out

    let options = ["alpha", "beta", "gamma", ""];

    let mut console = Console::new(Cursor::new(data.to_vec()), Vec::new());
    match console.confirm("Proceed?", true) {
        Ok(_) | Err(ConsoleError::EndOfInput) => {}
        // invalid UTF-8 is just another wrong answer
        Err(e) => panic!("unexpected confirm error: {e}"),
    }

    let mut console = Console::new(Cursor::new(data.to_vec()), Vec::new());
    match console.choose("Pick", &options, true) {
        Ok(Some(position)) => assert!((1..=options.len()).contains(&position)),
        Ok(None) => panic!("a repeating prompt only returns on a match"),
        Err(ConsoleError::EndOfInput) => {}
        Err(e) => panic!("unexpected choose error: {e}"),
    }

    let mut console = Console::new(Cursor::new(data.to_vec()), Vec::new());
    match console.read_line("", true) {
        Ok(line) => {
            assert!(!line.contains('\n'));
            assert_eq!(line, line.trim());
        }
        Err(ConsoleError::EndOfInput) => assert!(data.is_empty()),
        Err(e) => panic!("unexpected read error: {e}"),
    }
});
