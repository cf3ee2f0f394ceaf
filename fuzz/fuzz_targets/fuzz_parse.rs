#![no_main]
use jsonpin::{DEFAULT_TAB_SIZE, ParseOptions, Source, parse};
use libfuzzer_sys::fuzz_target;

// The first byte selects the option flags; the rest is the document.
// Whatever the input, `parse` must return rather than panic, and any error
// it reports must carry a position that resolves consistently.
fn check(data: &[u8]) {
    let Some((&flags, text)) = data.split_first() else {
        return;
    };
    let options = ParseOptions {
        allow_infinity_and_nan: flags & 1 != 0,
        allow_explicit_plus_sign_in_mantissa: flags & 2 != 0,
        allow_single_quote_strings: flags & 4 != 0,
        allow_number_to_start_with_dot: flags & 8 != 0,
    };
    let source = Source::new("fuzz.json", text);
    if let Err(error) = parse(&source, options) {
        assert!(error.char_index <= source.len());
        let resolved = source.get_line_and_column(error.char_index, DEFAULT_TAB_SIZE);
        assert_eq!(resolved.line, error.line);
        assert_eq!(resolved.column, error.column);
    }
}

fuzz_target!(|data: &[u8]| check(data));
