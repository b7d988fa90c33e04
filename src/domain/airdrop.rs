use alloy::primitives::{Address, B256, U256};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Contract address that marks an airdrop as report-only (never transact).
pub const DRY_RUN_SENTINEL: Address = Address::ZERO;

/// Parse a registry address string.
///
/// Requires a `0x` prefix and 40 hex digits. Mixed-case input must carry a
/// valid EIP-55 checksum; all-lowercase or all-uppercase input is accepted as is.
pub fn parse_address(raw: &str) -> Option<Address> {
    let digits = raw.strip_prefix("0x")?;
    if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    if has_upper && has_lower {
        Address::parse_checksummed(raw, None).ok()
    } else {
        Address::from_str(raw).ok()
    }
}

/// A scan target: the registry key as written plus its parsed address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Key exactly as it appears in the user registry
    pub raw: String,
    pub address: Address,
}

impl Target {
    pub fn parse(raw: &str) -> Option<Self> {
        parse_address(raw).map(|address| Self {
            raw: raw.to_string(),
            address,
        })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Claim protocol declared by a registry entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProtocolType {
    /// `claimable(address)` + `claimReward()`
    Simple,
    /// `isClaimed(uint256)` + `claim(uint256,address,uint256,bytes32[])`
    Merkle,
    /// Anything else found in the registry
    Unsupported(String),
}

impl ProtocolType {
    pub fn as_str(&self) -> &str {
        match self {
            ProtocolType::Simple => "simple",
            ProtocolType::Merkle => "merkle",
            ProtocolType::Unsupported(raw) => raw.as_str(),
        }
    }
}

impl From<String> for ProtocolType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "simple" => ProtocolType::Simple,
            "merkle" => ProtocolType::Merkle,
            _ => ProtocolType::Unsupported(raw),
        }
    }
}

impl From<ProtocolType> for String {
    fn from(protocol: ProtocolType) -> Self {
        protocol.as_str().to_string()
    }
}

impl Default for ProtocolType {
    fn default() -> Self {
        ProtocolType::Unsupported(String::new())
    }
}

impl fmt::Display for ProtocolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the airdrop registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirdropDefinition {
    pub id: String,
    pub name: String,
    pub token_symbol: String,
    /// Raw contract address; validated per pair with [`AirdropDefinition::contract_address`]
    #[serde(default, deserialize_with = "lenient_string")]
    pub contract: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_protocol")]
    pub protocol: ProtocolType,
    /// Reference to the merkle proof dataset (a path for file-backed loaders)
    #[serde(default)]
    pub proofs: Option<String>,
}

/// Non-string values become empty so the entry is skipped later instead of
/// failing the whole registry.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(raw) => raw,
        _ => String::new(),
    })
}

fn lenient_protocol<'de, D>(deserializer: D) -> Result<ProtocolType, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_string(deserializer).map(ProtocolType::from)
}

impl AirdropDefinition {
    /// The validated contract address, or `None` if the entry must be skipped.
    pub fn contract_address(&self) -> Option<Address> {
        parse_address(&self.contract)
    }
}

/// Claim tuple for one address in a merkle distribution
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawClaimEntry")]
pub struct MerkleClaimEntry {
    pub index: U256,
    pub amount: U256,
    pub proof: Vec<B256>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(u64),
    Str(String),
}

impl IntOrString {
    fn to_u256(&self, field: &str) -> Result<U256, String> {
        match self {
            IntOrString::Int(v) => Ok(U256::from(*v)),
            IntOrString::Str(s) => U256::from_str(s.trim())
                .map_err(|e| format!("invalid {} '{}': {}", field, s, e)),
        }
    }
}

#[derive(Deserialize)]
struct RawClaimEntry {
    index: IntOrString,
    amount: IntOrString,
    #[serde(default)]
    proof: Vec<String>,
}

impl TryFrom<RawClaimEntry> for MerkleClaimEntry {
    type Error = String;

    fn try_from(raw: RawClaimEntry) -> Result<Self, Self::Error> {
        let proof = raw
            .proof
            .iter()
            .map(|node| {
                B256::from_str(node).map_err(|e| format!("invalid proof node '{}': {}", node, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            index: raw.index.to_u256("index")?,
            amount: raw.amount.to_u256("amount")?,
            proof,
        })
    }
}

/// Proof dataset for one merkle airdrop, keyed by address string
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProofDataset {
    pub claims: HashMap<String, MerkleClaimEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address_rejects_malformed() {
        assert!(parse_address("").is_none());
        assert!(parse_address("0x1234").is_none());
        assert!(parse_address("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed00").is_none());
        assert!(parse_address("0xZZAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").is_none());
    }

    #[test]
    fn test_parse_address_checksum_rules() {
        // Valid EIP-55 checksum
        assert!(parse_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").is_some());
        // Same address, single-case forms
        assert!(parse_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").is_some());
        assert!(parse_address("0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED").is_some());
        // Broken checksum
        assert!(parse_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD").is_none());
    }

    #[test]
    fn test_zero_address_is_valid_sentinel() {
        let addr = parse_address("0x0000000000000000000000000000000000000000").unwrap();
        assert_eq!(addr, DRY_RUN_SENTINEL);
    }

    #[test]
    fn test_protocol_type_from_registry_string() {
        assert_eq!(ProtocolType::from("simple".to_string()), ProtocolType::Simple);
        assert_eq!(ProtocolType::from("merkle".to_string()), ProtocolType::Merkle);
        assert_eq!(
            ProtocolType::from("vesting".to_string()),
            ProtocolType::Unsupported("vesting".to_string())
        );
    }

    #[test]
    fn test_airdrop_definition_deserialize() {
        let json = r#"{
            "id": "demo-merkle",
            "name": "Demo Drop",
            "tokenSymbol": "DEMO",
            "contract": "0x0000000000000000000000000000000000000000",
            "type": "merkle",
            "proofs": "airdrops/proofs/demo.json"
        }"#;
        let drop: AirdropDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(drop.token_symbol, "DEMO");
        assert_eq!(drop.protocol, ProtocolType::Merkle);
        assert_eq!(drop.proofs.as_deref(), Some("airdrops/proofs/demo.json"));
        assert_eq!(drop.contract_address(), Some(DRY_RUN_SENTINEL));
    }

    #[test]
    fn test_malformed_contract_and_type_deserialize_as_skippable() {
        for contract in ["null", "12345", "{}", "[\"0x11\"]"] {
            let json = format!(
                r#"{{ "id": "bad", "name": "Bad", "tokenSymbol": "BAD",
                     "contract": {}, "type": "simple" }}"#,
                contract
            );
            let drop: AirdropDefinition = serde_json::from_str(&json).unwrap();
            assert_eq!(drop.contract, "");
            assert!(drop.contract_address().is_none());
        }

        let no_type: AirdropDefinition = serde_json::from_str(
            r#"{ "id": "t", "name": "T", "tokenSymbol": "T",
                 "contract": "0x1111111111111111111111111111111111111111" }"#,
        )
        .unwrap();
        assert_eq!(no_type.protocol, ProtocolType::Unsupported(String::new()));

        let numeric_type: AirdropDefinition = serde_json::from_str(
            r#"{ "id": "t", "name": "T", "tokenSymbol": "T",
                 "contract": "0x1111111111111111111111111111111111111111", "type": 3 }"#,
        )
        .unwrap();
        assert_eq!(numeric_type.protocol, ProtocolType::Unsupported(String::new()));
    }

    #[test]
    fn test_claim_entry_accepts_string_and_integer_fields() {
        let json = r#"{
            "index": 7,
            "amount": "1000000000000000000000000",
            "proof": ["0x1111111111111111111111111111111111111111111111111111111111111111"]
        }"#;
        let entry: MerkleClaimEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.index, U256::from(7));
        assert_eq!(entry.amount.to_string(), "1000000000000000000000000");
        assert_eq!(entry.proof.len(), 1);

        let bad = r#"{ "index": 1, "amount": "12abc", "proof": [] }"#;
        assert!(serde_json::from_str::<MerkleClaimEntry>(bad).is_err());
    }
}
