//! Named MAC lookup with an explicit `get_instance` / `init` / `do_final`
//! lifecycle. Lookup and key initialisation are the two places a MAC can be
//! unavailable.
use crate::{HmacSha1, SignError};

pub const MAC_ALGORITHM_DEFAULT: &str = "HmacSHA1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacAlgorithm {
    HmacSha1,
}

impl MacAlgorithm {
    pub fn from_name(name: &str) -> Result<Self, SignError> {
        if name.eq_ignore_ascii_case(MAC_ALGORITHM_DEFAULT) {
            Ok(Self::HmacSha1)
        } else {
            Err(SignError::AlgorithmUnavailable {
                algorithm: name.to_string(),
                reason: "no such algorithm",
            })
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::HmacSha1 => MAC_ALGORITHM_DEFAULT,
        }
    }

    pub fn mac_len(self) -> usize {
        match self {
            Self::HmacSha1 => crate::SHA1_LEN,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Mac {
    algorithm: MacAlgorithm,
}

impl Mac {
    pub fn get_instance(name: &str) -> Result<Self, SignError> {
        let algorithm = MacAlgorithm::from_name(name)?;
        tracing::debug!(algorithm = algorithm.name(), "mac instance created");
        Ok(Self { algorithm })
    }

    pub fn algorithm(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn mac_len(&self) -> usize {
        self.algorithm.mac_len()
    }

    pub fn init(self, key: &[u8]) -> Result<InitialisedMac, SignError> {
        if key.is_empty() {
            return Err(SignError::AlgorithmUnavailable {
                algorithm: self.algorithm().to_string(),
                reason: "empty key",
            });
        }
        let state = match self.algorithm {
            MacAlgorithm::HmacSha1 => MacState::HmacSha1(HmacSha1::new(key)),
        };
        Ok(InitialisedMac { state })
    }
}

#[derive(Debug, Clone)]
enum MacState {
    HmacSha1(HmacSha1),
}

/// A keyed MAC ready to absorb message bytes.
#[derive(Debug, Clone)]
pub struct InitialisedMac {
    state: MacState,
}

impl InitialisedMac {
    pub fn update(&mut self, message: &[u8]) {
        match &mut self.state {
            MacState::HmacSha1(hmac) => hmac.update(message),
        }
    }

    pub fn do_final(self, message: &[u8]) -> Vec<u8> {
        match self.state {
            MacState::HmacSha1(hmac) => hmac.update_and_digest(message).to_vec(),
        }
    }
}
