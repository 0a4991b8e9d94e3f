/// Multiplier of the polynomial header hash.
pub const HASH_MULTIPLIER: u32 = 31;

const HEADS_BODY: &str = "WASM filter: heads = 200\n";
const TAILS_BODY: &str = "WASM filter: tails = 500\n";

/// Hashes the request headers as the string `name:value;` repeated for
/// every pair, in order.
///
/// The hash starts at 0 and folds in every byte as `hash * 31 + byte` with
/// 32-bit wraparound, so it is identical on every platform. It is not
/// cryptographic.
pub fn header_hash(headers: &[(String, String)]) -> u32 {
    headers.iter().fold(0, |hash, (name, value)| {
        let hash = hash_bytes(hash, name.as_bytes());
        let hash = hash_bytes(hash, b":");
        let hash = hash_bytes(hash, value.as_bytes());
        hash_bytes(hash, b";")
    })
}

/// Continues the polynomial hash over `bytes`.
pub fn hash_bytes(seed: u32, bytes: &[u8]) -> u32 {
    bytes.iter().fold(seed, |hash, byte| {
        hash.wrapping_mul(HASH_MULTIPLIER).wrapping_add(u32::from(*byte))
    })
}

/// The side the coin lands on for a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coin {
    Heads,
    Tails,
}

impl Coin {
    /// Even hashes land on heads, odd ones on tails.
    pub fn from_hash(hash: u32) -> Self {
        if hash % 2 == 0 {
            Coin::Heads
        } else {
            Coin::Tails
        }
    }

    pub fn flip(headers: &[(String, String)]) -> Self {
        Coin::from_hash(header_hash(headers))
    }

    pub fn status(self) -> u32 {
        match self {
            Coin::Heads => 200,
            Coin::Tails => 500,
        }
    }

    pub fn body(self) -> &'static [u8] {
        match self {
            Coin::Heads => HEADS_BODY.as_bytes(),
            Coin::Tails => TAILS_BODY.as_bytes(),
        }
    }

    /// The log line recording the branch.
    pub fn describe(self) -> String {
        let side = match self {
            Coin::Heads => "heads",
            Coin::Tails => "tails",
        };
        format!("WASM filter: coin flip = {}, returning {}", side, self.status())
    }
}
