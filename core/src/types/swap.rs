use super::Token;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SwapForm {
    pub from: Option<Token>,
    pub to: Option<Token>,
    pub amount: String,
    /// Percent, as typed by the user.
    pub slippage: String,
}

impl SwapForm {
    pub fn is_complete(&self) -> bool {
        !self.amount.trim().is_empty() && self.from.is_some() && self.to.is_some()
    }

    pub fn flip(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SwapStatus {
    #[default]
    Idle,
    Pending,
    Approved,
    Success,
    Failed,
}

impl SwapStatus {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SwapStatus::Idle => None,
            SwapStatus::Pending => Some("⏳ Transaction pending..."),
            SwapStatus::Approved => Some("✅ Token approved, executing swap..."),
            SwapStatus::Success => Some("🎉 Swap completed successfully!"),
            SwapStatus::Failed => Some("❌ Transaction failed. Please try again."),
        }
    }

    pub fn alert_class(&self) -> &'static str {
        match self {
            SwapStatus::Success => "success",
            SwapStatus::Failed => "error",
            _ => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Portfolio,
    Swap,
    History,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Portfolio, Tab::Swap, Tab::History];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Portfolio => "Portfolio",
            Tab::Swap => "Swap",
            Tab::History => "History",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Tab::Portfolio => "/",
            Tab::Swap => "/swap",
            Tab::History => "/history",
        }
    }
}
