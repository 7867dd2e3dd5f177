use jumble_core::juggler::{ByteJuggler, DoubleJuggler, FloatJuggler, IntJuggler, LongJuggler, ShortJuggler};
use jumble_core::lorem::{self, Composer, ComposerInput};
use jumble_core::vocabulary;
use jumble_core::words;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows vocabulary loads and rejected arguments
    env_logger::init();

    // Unconstrained and signed values, one line per kind
    println!("i8:  {} {} {}", ByteJuggler::random(), ByteJuggler::positive(), ByteJuggler::negative());
    println!("i16: {} {} {}", ShortJuggler::random(), ShortJuggler::positive(), ShortJuggler::negative());
    println!("i32: {} {} {}", IntJuggler::random(), IntJuggler::positive(), IntJuggler::negative());
    println!("i64: {} {} {}", LongJuggler::random(), LongJuggler::positive(), LongJuggler::negative());
    println!("f32: {} {} {}", FloatJuggler::random(), FloatJuggler::positive(), FloatJuggler::negative());
    println!("f64: {} {} {}", DoubleJuggler::random(), DoubleJuggler::positive(), DoubleJuggler::negative());

    // One-sided bounds never fail, they saturate at the kind limits
    println!("Smaller than 10: {}", IntJuggler::smaller_than(10));
    println!("Greater than 10.5: {}", DoubleJuggler::greater_than(10.5));
    println!("Greater than i8::MAX: {}", ByteJuggler::greater_than(i8::MAX));

    // Signed bounds check the bound first
    println!("Positive smaller than 100: {}", ShortJuggler::positive_smaller_than(100)?);
    println!("Negative greater than -100: {}", LongJuggler::negative_greater_than(-100)?);
    match IntJuggler::positive_smaller_than(-5) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }

    // Ranges are half-open, reversed ones are rejected
    println!("Between 1 and 7: {}", IntJuggler::between(1, 7)?);
    println!("Between -1.0 and 1.0: {}", FloatJuggler::between(-1.0, 1.0)?);
    match LongJuggler::between(10, 1) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }

    // Fixed digit length
    println!("Seven digits: {}", IntJuggler::positive_with_length(7)?);
    println!("Seven digits (f64): {}", DoubleJuggler::positive_with_length(7)?);
    match ByteJuggler::positive_with_length(7) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }

    // Lorem ipsum from the shared vocabulary
    println!("{}", lorem::sentence()?);
    println!("{}", lorem::sentence_of_words(15)?);
    println!("{}", lorem::paragraph()?);
    println!("{}", lorem::paragraph_with_sentences_of_words(2, 8)?);

    // A composer over the dictionary, with short sentences by default
    let mut input = ComposerInput::default();
    input.set_words_range(3, 6)?;
    input.set_sentences_range(2, 3)?;
    match input.set_words_range(6, 3) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }
    let composer = Composer::with_input(vocabulary::dictionary()?, input);
    println!("{}", composer.paragraph()?);

    // Dictionary words
    println!("Word: {}", words::random_word()?);
    println!("Word starting with 'q': {}", words::random_word_starting_with('q')?);
    println!("Word starting with \"na\": {}", words::random_word_with_prefix("na")?);
    match words::random_word_with_prefix("xyz") {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }

    Ok(())
}
