use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub(crate) struct RequestArguments<'a, P: Serialize> {
    pub method: &'a str,
    pub params: P,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CallRequest {
    pub to: String,
    pub data: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    pub block_number: Option<String>,
    // `0x1` on success, `0x0` on revert. Absent on pre-Byzantium chains.
    pub status: Option<String>,
}

impl TransactionReceipt {
    pub fn is_success(&self) -> bool {
        self.status.as_deref().map_or(true, |status| status == "0x1")
    }
}
