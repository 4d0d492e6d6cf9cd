//! A parsed identity of any of the three grammars.

use clap::ValueEnum;
use serde::Serialize;

use nvr_core::{
    EpochPolicy, Evr, IdentityError, Nvr, Nvra, make_evr, make_nvr, make_nvra, parse_evr,
    parse_nvr, parse_nvra,
};

/// Which grammar to parse input with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// `name-[E:]version-release`
    Nvr,
    /// `name-[E:]version-release.arch[.rpm]`
    Nvra,
    /// `[E:]version-release`
    Evr,
}

/// One parsed identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Identity {
    /// Parsed with [`Kind::Nvr`]
    Nvr(Nvr),
    /// Parsed with [`Kind::Nvra`]
    Nvra(Nvra),
    /// Parsed with [`Kind::Evr`]
    Evr(Evr),
}

impl Identity {
    /// Parse `s` with the grammar for `kind`.
    pub fn parse(kind: Kind, s: &str, allow_empty_release: bool) -> Result<Self, IdentityError> {
        Ok(match kind {
            Kind::Nvr => Self::Nvr(parse_nvr(s)?),
            Kind::Nvra => Self::Nvra(parse_nvra(s)?),
            Kind::Evr => Self::Evr(parse_evr(s, allow_empty_release)?),
        })
    }

    /// Render in canonical form. `add_rpm` only affects NVRAs.
    pub fn format(&self, policy: EpochPolicy, add_rpm: bool) -> String {
        match self {
            Self::Nvr(nvr) => make_nvr(nvr, policy),
            Self::Nvra(nvra) => make_nvra(nvra, policy, add_rpm),
            Self::Evr(evr) => make_evr(evr, policy),
        }
    }

    /// The package name, if the grammar has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Nvr(nvr) => Some(nvr.name()),
            Self::Nvra(nvra) => Some(nvra.name()),
            Self::Evr(_) => None,
        }
    }

    /// The architecture, for NVRAs.
    pub fn arch(&self) -> Option<&str> {
        match self {
            Self::Nvra(nvra) => Some(nvra.arch().as_str()),
            Self::Nvr(_) | Self::Evr(_) => None,
        }
    }

    /// Whether this is a source package. Only NVRAs can be.
    pub fn is_source(&self) -> bool {
        matches!(self, Self::Nvra(nvra) if nvra.is_source())
    }
}

impl AsRef<Evr> for Identity {
    fn as_ref(&self) -> &Evr {
        match self {
            Self::Nvr(nvr) => nvr.evr(),
            Self::Nvra(nvra) => nvra.evr(),
            Self::Evr(evr) => evr,
        }
    }
}
