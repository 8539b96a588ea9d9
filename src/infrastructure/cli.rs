use clap::Parser;

use crate::{domain::Language, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    /// Initial contents of the text box
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub text: String,

    /// Start in this language instead of the saved one (EN or LT)
    #[arg(short, long, value_name = "LANG")]
    pub lang: Option<Language>,

    /// Print the text to stdout on exit
    #[arg(short, long)]
    pub print: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["vkeyboard"]).expect("parses");
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 30.0);
        assert_eq!(cli.text, "");
        assert_eq!(cli.lang, None);
        assert!(!cli.print);
    }

    #[test]
    fn test_lang_is_case_insensitive() {
        let cli = Cli::try_parse_from(["vkeyboard", "--lang", "lt", "--text", "ačiū", "-p"])
            .expect("parses");
        assert_eq!(cli.lang, Some(Language::Lt));
        assert_eq!(cli.text, "ačiū");
        assert!(cli.print);
    }

    #[test]
    fn test_unknown_lang_rejected() {
        assert!(Cli::try_parse_from(["vkeyboard", "--lang", "DE"]).is_err());
    }
}
