use crate::error::*;
use crate::*;
use one_err::OneErr;
use zeroize::Zeroize;

/// Number of random bytes drawn to generate a seed. The final seed byte
/// is derived from them.
pub const ENTROPY_LENGTH: usize = SEED_LENGTH - 1;

/// Number of times the seed is absorbed into the subkey derivation XOF.
const SUBKEY_ABSORB_ROUNDS: usize = 4;

/// Upper bound on the total bytes `count * size` derived in one call.
pub const MAX_SUBKEY_OUTPUT: usize = 16 * 1024 * 1024;

/// Network tag redundantly embedded in the seed bits.
///
/// The top nibble of byte 15 mirrors one bit from each of bytes 0..=3
/// (bit 7, 6, 5, 4 respectively). A straight copy marks a live network
/// seed, a complemented copy a test network seed.
///
/// Serializes as `live`, `test` or `invalid`. Deserializes through
/// [`std::str::FromStr`], so only the live and test labels are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NetworkFlag {
    /// live network seed
    Live,

    /// test network seed
    Test,

    /// the embedded bits match neither network
    Invalid,
}

impl NetworkFlag {
    /// Derive the flag from raw seed bytes. Never fails: anything too
    /// short to carry the flag bits is [`NetworkFlag::Invalid`].
    pub fn of_bytes(seed: &[u8]) -> Self {
        if seed.len() < SEED_LENGTH {
            return Self::Invalid;
        }
        let mode = mode_bits(seed);
        let embedded = seed[SEED_LENGTH - 2] & 0xf0;
        if embedded == mode {
            Self::Live
        } else if embedded ^ 0xf0 == mode {
            Self::Test
        } else {
            Self::Invalid
        }
    }

    /// The label printed for this flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "LIVENET",
            Self::Test => "TESTNET",
            Self::Invalid => "ERROR",
        }
    }
}

impl std::fmt::Display for NetworkFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NetworkFlag {
    type Err = OneErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "live" | "livenet" => Ok(Self::Live),
            "test" | "testnet" => Ok(Self::Test),
            _ => Err(OneErr::with_message(
                INVALID_FLAG_ERROR,
                format!("expected live or test, got {s:?}"),
            )),
        }
    }
}

impl<'de> serde::Deserialize<'de> for NetworkFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tmp: String = serde::Deserialize::deserialize(deserializer)?;
        tmp.parse().map_err(serde::de::Error::custom)
    }
}

fn mode_bits(seed: &[u8]) -> u8 {
    (seed[0] & 0x80) | (seed[1] & 0x40) | (seed[2] & 0x20) | (seed[3] & 0x10)
}

/// Check the structural seed invariants: exact length and a zero low
/// nibble in the final byte.
pub fn validate_bytes(seed: &[u8]) -> SeedResult<()> {
    if seed.len() != SEED_LENGTH {
        return Err(length_error(format!(
            "expected {} seed bytes, got {}",
            SEED_LENGTH,
            seed.len()
        )));
    }
    if seed[SEED_LENGTH - 1] & 0x0f != 0 {
        return Err(length_error("seed padding nibble is not zero"));
    }
    Ok(())
}

/// The canonical 17 byte seed.
///
/// Every constructor validates the structural invariants and either
/// returns a complete seed or an error, there is no partially initialized
/// state. The buffer is zeroed on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed([u8; SEED_LENGTH]);

impl Drop for Seed {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seed")
            .field("network_flag", &self.network_flag())
            .finish()
    }
}

impl Seed {
    fn priv_new(seed: [u8; SEED_LENGTH], from: &'static str) -> Self {
        let seed = Self(seed);
        tracing::debug!(from, network_flag = %seed.network_flag(), "seed recovered");
        seed
    }

    /// Generate a new random seed tagged with the given network flag.
    pub fn generate(flag: NetworkFlag) -> SeedResult<Self> {
        Self::generate_with(flag, sodoken::random::randombytes_buf)
    }

    /// Generate a seed drawing entropy from `fill`.
    pub(crate) fn generate_with<F, E>(flag: NetworkFlag, fill: F) -> SeedResult<Self>
    where
        F: FnOnce(&mut [u8]) -> Result<(), E>,
        E: std::fmt::Display,
    {
        if flag == NetworkFlag::Invalid {
            return Err(invalid_flag());
        }

        let mut entropy = [0; ENTROPY_LENGTH];
        if let Err(err) = fill(&mut entropy[..]) {
            return Err(OneErr::with_message(
                ENTROPY_ERROR,
                format!("unable to generate random seed: {err}"),
            ));
        }

        let out = Self::from_entropy(flag, &entropy);
        entropy.zeroize();
        out
    }

    /// Build a seed from caller supplied entropy, embedding the network
    /// flag into the top nibble of byte 15. The displaced nibble moves
    /// into the final byte, whose low nibble stays zero.
    pub fn from_entropy(
        flag: NetworkFlag,
        entropy: &[u8; ENTROPY_LENGTH],
    ) -> SeedResult<Self> {
        let mut mode = mode_bits(entropy);
        match flag {
            NetworkFlag::Live => (),
            NetworkFlag::Test => mode ^= 0xf0,
            NetworkFlag::Invalid => return Err(invalid_flag()),
        }

        let mut seed = [0; SEED_LENGTH];
        seed[..ENTROPY_LENGTH].copy_from_slice(entropy);
        let displaced = seed[SEED_LENGTH - 2] & 0xf0;
        seed[SEED_LENGTH - 2] = mode | (seed[SEED_LENGTH - 2] & 0x0f);
        seed[SEED_LENGTH - 1] = displaced;

        tracing::debug!(network_flag = %flag, "seed generated");
        Ok(Self(seed))
    }

    /// Recover a seed from its raw bytes.
    pub fn from_bytes(seed: &[u8]) -> SeedResult<Self> {
        validate_bytes(seed)?;
        let mut out = [0; SEED_LENGTH];
        out.copy_from_slice(seed);
        Ok(Self::priv_new(out, "bytes"))
    }

    /// Recover a seed from the short hex form produced by [`Seed::to_hex`].
    ///
    /// The dropped trailing `'0'` digit is restored before decoding, so the
    /// input must be exactly `2 * SEED_LENGTH - 1` hex digits.
    pub fn from_hex(seed_hex: &str) -> SeedResult<Self> {
        let seed_hex = seed_hex.trim();
        if seed_hex.len() != SEED_LENGTH * 2 - 1 {
            return Err(length_error(format!(
                "expected {} hex digits, got {}",
                SEED_LENGTH * 2 - 1,
                seed_hex.len()
            )));
        }

        let mut full = format!("{seed_hex}0");
        let mut out = [0; SEED_LENGTH];
        let res = hex::decode_to_slice(&full, &mut out);
        full.zeroize();
        res.map_err(decode_error)?;
        validate_bytes(&out)?;
        Ok(Self::priv_new(out, "hex"))
    }

    /// Recover a seed from exactly [`PHRASE_LENGTH`] dictionary words.
    pub fn from_phrase<S: AsRef<str>>(words: &[S]) -> SeedResult<Self> {
        let out = mnemonic::phrase_to_bytes(words)?;
        Ok(Self::priv_new(out, "phrase"))
    }

    /// Recover a seed from a whitespace separated phrase.
    pub fn from_phrase_str(phrase: &str) -> SeedResult<Self> {
        Self::from_phrase(&mnemonic::parse_phrase(phrase))
    }

    /// Recover a seed from checksummed container text.
    pub fn from_container_text(text: &str) -> SeedResult<Self> {
        let out = container::unpack(text.trim())?;
        Ok(Self::priv_new(out, "container"))
    }

    /// The raw seed bytes.
    pub fn as_bytes(&self) -> &[u8; SEED_LENGTH] {
        &self.0
    }

    /// The structural invariants hold. Always true for a constructed seed.
    pub fn is_valid(&self) -> bool {
        validate_bytes(&self.0).is_ok()
    }

    /// Lowercase hex of the seed, minus the always-zero final digit.
    pub fn to_hex(&self) -> String {
        let mut out = hex::encode(self.0);
        out.pop();
        out
    }

    /// The 12 word mnemonic phrase.
    pub fn to_phrase(&self) -> Vec<&'static str> {
        mnemonic::bytes_to_phrase(&self.0)
    }

    /// The checksummed base58 container text.
    pub fn to_container_text(&self) -> String {
        container::pack(&self.0)
    }

    /// The network flag embedded in this seed.
    pub fn network_flag(&self) -> NetworkFlag {
        NetworkFlag::of_bytes(&self.0)
    }

    /// Derive `count` subkeys of `size` bytes each.
    ///
    /// The seed is absorbed four times into SHAKE256 and `count * size`
    /// bytes are squeezed out and split in order.
    pub fn derive_subkeys(
        &self,
        count: usize,
        size: usize,
    ) -> SeedResult<Vec<Box<[u8]>>> {
        use sha3::digest::{ExtendableOutput, Update, XofReader};

        if count == 0 || size == 0 {
            return Err(invalid_argument(format!(
                "subkey count and size must be positive, got count = {count}, size = {size}"
            )));
        }
        match count.checked_mul(size) {
            Some(total) if total <= MAX_SUBKEY_OUTPUT => (),
            _ => {
                return Err(invalid_argument(format!(
                    "subkey output too large: {count} * {size} bytes, max {MAX_SUBKEY_OUTPUT}"
                )))
            }
        }

        let mut xof = sha3::Shake256::default();
        for _ in 0..SUBKEY_ABSORB_ROUNDS {
            xof.update(&self.0);
        }
        let mut reader = xof.finalize_xof();

        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            let mut key = vec![0; size].into_boxed_slice();
            reader.read(&mut key);
            out.push(key);
        }
        Ok(out)
    }

    /// Derive subkeys as lowercase hex strings.
    pub fn derive_subkeys_hex(
        &self,
        count: usize,
        size: usize,
    ) -> SeedResult<Vec<String>> {
        Ok(self
            .derive_subkeys(count, size)?
            .iter()
            .map(hex::encode)
            .collect())
    }
}

fn invalid_flag() -> OneErr {
    OneErr::with_message(
        INVALID_FLAG_ERROR,
        "network flag should be live or test",
    )
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_container_text())
    }
}

impl std::str::FromStr for Seed {
    type Err = OneErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_container_text(s)
    }
}

impl serde::Serialize for Seed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_container_text())
    }
}

impl<'de> serde::Deserialize<'de> for Seed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tmp: String = serde::Deserialize::deserialize(deserializer)?;
        Self::from_container_text(&tmp).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VECTOR_HEX: &str = "442f54cd072a9638be4a0344e1a6e5f01";
    const VECTOR_TEXT: &str = "9J877LVjhr3Xxd2nGzRVRVNUZpSKJF4TH";
    const VECTOR_PHRASE: &str =
        "during kingdom crew atom practice brisk weird document eager artwork ride then";
    const VECTOR_KEY_1: &str =
        "4534075cbcfc6ada1bb6b9e53d53f72341746031d9d17a3089a117766e7cda9e";
    const VECTOR_KEY_10: &str =
        "be4a4a0730e19371edef04d38f9ca8187c376633f906ad602b7716e6d19b8374";

    #[test]
    fn known_vector_all_forms() {
        let seed = Seed::from_hex(VECTOR_HEX).unwrap();
        assert_eq!(VECTOR_HEX, seed.to_hex());
        assert_eq!(VECTOR_TEXT, seed.to_container_text());
        assert_eq!(VECTOR_PHRASE, seed.to_phrase().join(" "));
        assert_eq!(NetworkFlag::Test, seed.network_flag());
        assert_eq!("TESTNET", seed.network_flag().to_string());

        let keys = seed.derive_subkeys_hex(10, 32).unwrap();
        assert_eq!(10, keys.len());
        assert_eq!(VECTOR_KEY_1, keys[0]);
        assert_eq!(VECTOR_KEY_10, keys[9]);

        assert_eq!(seed, Seed::from_container_text(VECTOR_TEXT).unwrap());
        assert_eq!(seed, Seed::from_phrase_str(VECTOR_PHRASE).unwrap());
        assert_eq!(seed, Seed::from_bytes(seed.as_bytes()).unwrap());
    }

    #[test]
    fn hex_accepts_uppercase() {
        let seed = Seed::from_hex(&VECTOR_HEX.to_uppercase()).unwrap();
        assert_eq!(VECTOR_HEX, seed.to_hex());
    }

    #[test]
    fn hex_errors() {
        // the full 34 digit form is not accepted
        let err = Seed::from_hex(&format!("{VECTOR_HEX}0")).unwrap_err();
        assert_eq!(LENGTH_ERROR, err.str_kind());

        let err = Seed::from_hex("").unwrap_err();
        assert_eq!(LENGTH_ERROR, err.str_kind());

        let bad = format!("{}x", &VECTOR_HEX[..VECTOR_HEX.len() - 1]);
        let err = Seed::from_hex(&bad).unwrap_err();
        assert_eq!(DECODE_ERROR, err.str_kind());
    }

    #[test]
    fn bytes_errors() {
        let err = Seed::from_bytes(&[0; 16]).unwrap_err();
        assert_eq!(LENGTH_ERROR, err.str_kind());

        let mut bytes = [0; SEED_LENGTH];
        bytes[SEED_LENGTH - 1] = 0x01;
        let err = Seed::from_bytes(&bytes).unwrap_err();
        assert_eq!(LENGTH_ERROR, err.str_kind());
    }

    #[test]
    fn generate_embeds_flag() {
        for _ in 0..16 {
            let live = Seed::generate(NetworkFlag::Live).unwrap();
            assert_eq!(NetworkFlag::Live, live.network_flag());
            assert!(live.is_valid());

            let test = Seed::generate(NetworkFlag::Test).unwrap();
            assert_eq!(NetworkFlag::Test, test.network_flag());
            assert!(test.is_valid());
        }
    }

    #[test]
    fn generate_rejects_invalid_flag() {
        let err = Seed::generate(NetworkFlag::Invalid).unwrap_err();
        assert_eq!(INVALID_FLAG_ERROR, err.str_kind());
    }

    #[test]
    fn from_entropy_layout() {
        let entropy = [
            0x80, 0x40, 0x20, 0x10, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x3c,
        ];
        let live = Seed::from_entropy(NetworkFlag::Live, &entropy).unwrap();
        assert_eq!(0xfc, live.as_bytes()[15]);
        assert_eq!(0x30, live.as_bytes()[16]);
        assert_eq!(NetworkFlag::Live, live.network_flag());

        let test = Seed::from_entropy(NetworkFlag::Test, &entropy).unwrap();
        assert_eq!(0x0c, test.as_bytes()[15]);
        assert_eq!(0x30, test.as_bytes()[16]);
        assert_eq!(NetworkFlag::Test, test.network_flag());
    }

    #[test]
    fn inconsistent_flag_bits_are_invalid() {
        let mut bytes = [0; SEED_LENGTH];
        bytes[SEED_LENGTH - 2] = 0x50;
        let seed = Seed::from_bytes(&bytes).unwrap();
        assert_eq!(NetworkFlag::Invalid, seed.network_flag());
        assert_eq!("ERROR", seed.network_flag().to_string());
        assert_eq!(NetworkFlag::Invalid, NetworkFlag::of_bytes(&[0; 3]));
    }

    #[test]
    fn subkey_argument_errors() {
        let seed = Seed::from_hex(VECTOR_HEX).unwrap();
        for (count, size) in [(0, 32), (10, 0), (usize::MAX, 2)] {
            let err = seed.derive_subkeys(count, size).unwrap_err();
            assert_eq!(INVALID_ARGUMENT_ERROR, err.str_kind());
        }
    }

    #[test]
    fn oversized_subkey_output_is_rejected() {
        let seed = Seed::from_hex(VECTOR_HEX).unwrap();
        for (count, size) in [(100_000_000_000_000, 1), (1, MAX_SUBKEY_OUTPUT + 1)] {
            let err = seed.derive_subkeys(count, size).unwrap_err();
            assert_eq!(INVALID_ARGUMENT_ERROR, err.str_kind());
        }
        let keys = seed.derive_subkeys(MAX_SUBKEY_OUTPUT / 32, 32).unwrap();
        assert_eq!(MAX_SUBKEY_OUTPUT / 32, keys.len());
    }

    #[test]
    fn entropy_failure_is_reported() {
        let err = Seed::generate_with(NetworkFlag::Live, |_: &mut [u8]| {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "no entropy"))
        })
        .unwrap_err();
        assert_eq!(ENTROPY_ERROR, err.str_kind());

        // the flag is checked before any entropy is drawn
        let err = Seed::generate_with(NetworkFlag::Invalid, |_: &mut [u8]| -> Result<(), String> {
            panic!("entropy drawn for an invalid flag")
        })
        .unwrap_err();
        assert_eq!(INVALID_FLAG_ERROR, err.str_kind());

        let seed = Seed::generate_with(NetworkFlag::Test, |buf: &mut [u8]| -> Result<(), String> {
            buf.fill(0x42);
            Ok(())
        })
        .unwrap();
        assert_eq!(NetworkFlag::Test, seed.network_flag());
    }

    #[test]
    fn subkeys_are_a_prefix_stream() {
        let seed = Seed::from_hex(VECTOR_HEX).unwrap();
        let one = seed.derive_subkeys(1, 64).unwrap();
        let two = seed.derive_subkeys(2, 32).unwrap();
        assert_eq!(&one[0][..32], &two[0][..]);
        assert_eq!(&one[0][32..], &two[1][..]);
        assert_eq!(two, seed.derive_subkeys(2, 32).unwrap());
    }

    #[test]
    fn flag_parsing() {
        assert_eq!(NetworkFlag::Live, "live".parse::<NetworkFlag>().unwrap());
        assert_eq!(NetworkFlag::Live, "LIVENET".parse::<NetworkFlag>().unwrap());
        assert_eq!(NetworkFlag::Test, "Test".parse::<NetworkFlag>().unwrap());
        let err = "invalid".parse::<NetworkFlag>().unwrap_err();
        assert_eq!(INVALID_FLAG_ERROR, err.str_kind());
    }

    #[test]
    fn flag_serde_accepts_network_labels() {
        assert_eq!("\"test\"", serde_json::to_string(&NetworkFlag::Test).unwrap());
        assert_eq!(
            NetworkFlag::Test,
            serde_json::from_str::<NetworkFlag>("\"testnet\"").unwrap()
        );
        assert_eq!(
            NetworkFlag::Live,
            serde_json::from_str::<NetworkFlag>("\"LIVE\"").unwrap()
        );
        assert!(serde_json::from_str::<NetworkFlag>("\"invalid\"").is_err());
    }

    #[test]
    fn serde_as_container_text() {
        let seed = Seed::from_hex(VECTOR_HEX).unwrap();
        let json = serde_json::to_string(&seed).unwrap();
        assert_eq!(format!("\"{VECTOR_TEXT}\""), json);
        let back: Seed = serde_json::from_str(&json).unwrap();
        assert_eq!(seed, back);
        assert_eq!(VECTOR_TEXT, seed.to_string());
        assert_eq!(seed, VECTOR_TEXT.parse::<Seed>().unwrap());
    }

    #[test]
    fn debug_hides_bytes() {
        let seed = Seed::from_hex(VECTOR_HEX).unwrap();
        let dbg = format!("{seed:?}");
        assert!(!dbg.contains("442f"));
        assert!(dbg.contains("Test"));
    }
}
