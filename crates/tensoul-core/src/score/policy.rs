use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

/// Tsumo-loss convention for self-draw payments.
///
/// Some three-player rule sets abolish tsumo loss: the absent fourth seat's
/// share is split between the payers, each half rounded up to 100.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TsumoLoss {
    #[default]
    Standard,
    Abolished,
}

impl TsumoLoss {
    /// Extra amount each payer adds for `amount`: half of it rounded up to
    /// the next 100 when tsumo loss is abolished, otherwise nothing.
    pub fn half_share(&self, amount: i32) -> i32 {
        match self {
            Self::Standard => 0,
            Self::Abolished => 100 * ((amount.max(0) + 199) / 200),
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
