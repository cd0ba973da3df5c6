//! Secret input forms accepted on the command line.

use one_err::OneErr;
use seed_codec::{Seed, SeedResult};

/// The representation a secret input is given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputForm {
    /// short hex text, 33 digits
    Hex,

    /// 12 word mnemonic phrase
    Phrase,

    /// checksummed base58 container text
    Base58,
}

impl std::str::FromStr for InputForm {
    type Err = OneErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(Self::Hex),
            "phrase" => Ok(Self::Phrase),
            "base58" => Ok(Self::Base58),
            oth => Err(format!(
                "unknown input form {oth:?}, expected hex, phrase or base58"
            )
            .into()),
        }
    }
}

impl std::fmt::Display for InputForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Hex => "hex",
            Self::Phrase => "phrase",
            Self::Base58 => "base58",
        })
    }
}

impl InputForm {
    /// Recover a seed from input text in this form.
    pub fn recover(&self, input: &str) -> SeedResult<Seed> {
        match self {
            Self::Hex => Seed::from_hex(input),
            Self::Phrase => Seed::from_phrase_str(input),
            Self::Base58 => Seed::from_container_text(input),
        }
    }
}

/// Strip a single trailing `\n` or `\r\n` from piped input.
pub fn trim_line_ending(input: &mut Vec<u8>) {
    if input.ends_with(b"\r\n") {
        input.pop();
        input.pop();
    } else if input.ends_with(b"\n") {
        input.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_codec::error::*;

    #[test]
    fn forms_recover_the_same_seed() {
        let hex = InputForm::Hex
            .recover("442f54cd072a9638be4a0344e1a6e5f01")
            .unwrap();
        let phrase = InputForm::Phrase
            .recover("during kingdom crew atom practice brisk weird document eager artwork ride then\n")
            .unwrap();
        let base58 = InputForm::Base58
            .recover("9J877LVjhr3Xxd2nGzRVRVNUZpSKJF4TH\r\n")
            .unwrap();
        assert_eq!(hex, phrase);
        assert_eq!(hex, base58);
    }

    #[test]
    fn form_names() {
        for form in [InputForm::Hex, InputForm::Phrase, InputForm::Base58] {
            assert_eq!(form, form.to_string().parse::<InputForm>().unwrap());
        }
        assert!("wif".parse::<InputForm>().is_err());
    }

    #[test]
    fn errors_keep_their_kind() {
        let err = InputForm::Phrase.recover("during kingdom").unwrap_err();
        assert_eq!(LENGTH_ERROR, err.str_kind());
    }

    #[test]
    fn line_endings_are_trimmed_once() {
        let cases: [(&[u8], &[u8]); 6] = [
            (b"abc\n", b"abc"),
            (b"abc\r\n", b"abc"),
            (b"abc\n\n", b"abc\n"),
            (b"abc\r", b"abc\r"),
            (b"\n", b""),
            (b"", b""),
        ];
        for (input, expect) in cases {
            let mut buf = input.to_vec();
            trim_line_ending(&mut buf);
            assert_eq!(expect, &buf[..]);
        }
    }
}
