use std::{io::ErrorKind, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{error::SubmitError, utils::hex_preview};

/// Raw proof artifact, kept exactly as read from disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofBytes(Vec<u8>);

impl ProofBytes {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for ProofBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Body of an evaluation request. `proof` serializes as a JSON array of
/// integers in `0..=255`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPayload {
    proof: Vec<u8>,
}

impl RequestPayload {
    pub fn proof(&self) -> &[u8] {
        &self.proof
    }
}

/// Reads the whole proof file. Content and length are not checked.
pub fn load_proof(path: impl AsRef<Path>) -> Result<ProofBytes, SubmitError> {
    let path = path.as_ref();
    debug!("Loading proof from {}", path.display());

    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SubmitError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => SubmitError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    debug!("Read {} proof bytes: {}", bytes.len(), hex_preview(&bytes));
    Ok(ProofBytes(bytes))
}

pub fn build_payload(bytes: ProofBytes) -> RequestPayload {
    RequestPayload { proof: bytes.0 }
}
