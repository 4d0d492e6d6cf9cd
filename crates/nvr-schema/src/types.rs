//! Identity records: EVR, NVR and NVRA.

use serde::{Deserialize, Serialize};

use crate::arch::Arch;
use crate::epoch::Epoch;
use crate::error::{FieldError, IdentityError};

/// Reject values containing whitespace or any of `forbidden`.
fn validate(
    field: &'static str,
    value: String,
    forbidden: &[char],
    allow_empty: bool,
) -> Result<String, FieldError> {
    let invalid = (!allow_empty && value.is_empty())
        || value
            .chars()
            .any(|c| c.is_whitespace() || forbidden.contains(&c));
    if invalid {
        Err(FieldError::new(field, value))
    } else {
        Ok(value)
    }
}

const LABEL_FORBIDDEN: [char; 3] = ['-', ':', '/'];
const NAME_FORBIDDEN: [char; 2] = [':', '/'];

/// Epoch, version and release: the part of an identity that is ordered.
///
/// Version is never empty. Release may be empty, which only the
/// `allow_empty_release` EVR grammar produces. Neither contains `-`, `:`,
/// `/` or whitespace.
///
/// Equality is structural: `1.0` and `1.00` are different records even
/// though they compare equal as versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EvrRepr", into = "EvrRepr")]
pub struct Evr {
    epoch: Option<Epoch>,
    version: String,
    release: String,
}

impl Evr {
    /// Create a validated EVR.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] if the version is empty or either label
    /// contains a separator or whitespace.
    pub fn new(
        epoch: Option<Epoch>,
        version: impl Into<String>,
        release: impl Into<String>,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            epoch,
            version: validate("version", version.into(), &LABEL_FORBIDDEN, false)?,
            release: validate("release", release.into(), &LABEL_FORBIDDEN, true)?,
        })
    }

    /// The epoch, if one was given.
    pub fn epoch(&self) -> Option<&Epoch> {
        self.epoch.as_ref()
    }

    /// Get the version string
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Get the release string (possibly empty)
    pub fn release(&self) -> &str {
        &self.release
    }

    /// Whether the release is non-empty.
    pub fn has_release(&self) -> bool {
        !self.release.is_empty()
    }
}

impl std::fmt::Display for Evr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(epoch) = self.epoch.as_ref().filter(|e| !e.is_zero()) {
            write!(f, "{epoch}:")?;
        }
        f.write_str(&self.version)?;
        if self.has_release() {
            write!(f, "-{}", self.release)?;
        }
        Ok(())
    }
}

/// A package identity without architecture: `name-[epoch:]version-release`.
///
/// The name may itself contain dashes and digits (`openmpi-1.10`); the
/// release is always present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NvrRepr", into = "NvrRepr")]
pub struct Nvr {
    name: String,
    evr: Evr,
}

impl Nvr {
    /// Create a validated NVR from a name and an EVR.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] if the name is empty or contains `:`, `/` or
    /// whitespace, or if the EVR has an empty release.
    pub fn new(name: impl Into<String>, evr: Evr) -> Result<Self, FieldError> {
        if !evr.has_release() {
            return Err(FieldError::new("release", ""));
        }
        Ok(Self {
            name: validate("name", name.into(), &NAME_FORBIDDEN, false)?,
            evr,
        })
    }

    /// Create a validated NVR from its individual fields.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] for the first field that fails validation.
    pub fn from_parts(
        name: impl Into<String>,
        epoch: Option<Epoch>,
        version: impl Into<String>,
        release: impl Into<String>,
    ) -> Result<Self, FieldError> {
        Self::new(name, Evr::new(epoch, version, release)?)
    }

    /// Get the package name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The EVR portion.
    pub fn evr(&self) -> &Evr {
        &self.evr
    }

    /// The epoch, if one was given.
    pub fn epoch(&self) -> Option<&Epoch> {
        self.evr.epoch()
    }

    /// Get the version string
    pub fn version(&self) -> &str {
        self.evr.version()
    }

    /// Get the release string
    pub fn release(&self) -> &str {
        self.evr.release()
    }
}

impl std::fmt::Display for Nvr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.name, self.evr)
    }
}

/// A package identity with architecture: `name-[epoch:]version-release.arch`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NvraRepr", into = "NvraRepr")]
pub struct Nvra {
    nvr: Nvr,
    arch: Arch,
}

impl Nvra {
    /// Attach an architecture to an NVR.
    pub fn new(nvr: Nvr, arch: Arch) -> Self {
        Self { nvr, arch }
    }

    /// Create a validated NVRA from its individual fields.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] for the first field that fails validation.
    pub fn from_parts(
        name: impl Into<String>,
        epoch: Option<Epoch>,
        version: impl Into<String>,
        release: impl Into<String>,
        arch: impl Into<String>,
    ) -> Result<Self, FieldError> {
        Ok(Self::new(
            Nvr::from_parts(name, epoch, version, release)?,
            Arch::new(arch)?,
        ))
    }

    /// The NVR portion.
    pub fn nvr(&self) -> &Nvr {
        &self.nvr
    }

    /// The EVR portion.
    pub fn evr(&self) -> &Evr {
        self.nvr.evr()
    }

    /// Get the package name
    pub fn name(&self) -> &str {
        self.nvr.name()
    }

    /// The epoch, if one was given.
    pub fn epoch(&self) -> Option<&Epoch> {
        self.nvr.epoch()
    }

    /// Get the version string
    pub fn version(&self) -> &str {
        self.nvr.version()
    }

    /// Get the release string
    pub fn release(&self) -> &str {
        self.nvr.release()
    }

    /// Get the architecture
    pub fn arch(&self) -> &Arch {
        &self.arch
    }

    /// Whether this is a source package (`src` or `nosrc`).
    pub fn is_source(&self) -> bool {
        self.arch.is_source()
    }
}

impl std::fmt::Display for Nvra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.nvr, self.arch)
    }
}

impl AsRef<Evr> for Evr {
    fn as_ref(&self) -> &Evr {
        self
    }
}

impl AsRef<Evr> for Nvr {
    fn as_ref(&self) -> &Evr {
        &self.evr
    }
}

impl AsRef<Evr> for Nvra {
    fn as_ref(&self) -> &Evr {
        self.nvr.evr()
    }
}

impl AsRef<Nvr> for Nvr {
    fn as_ref(&self) -> &Nvr {
        self
    }
}

impl AsRef<Nvr> for Nvra {
    fn as_ref(&self) -> &Nvr {
        &self.nvr
    }
}

// Wire forms. Deserialization funnels through the validating constructors,
// so a record that exists is always well formed.

#[derive(Serialize, Deserialize)]
struct EvrRepr {
    #[serde(default)]
    epoch: Option<String>,
    version: String,
    #[serde(default)]
    release: String,
}

impl TryFrom<EvrRepr> for Evr {
    type Error = IdentityError;

    fn try_from(repr: EvrRepr) -> Result<Self, Self::Error> {
        let epoch = Epoch::parse_optional(repr.epoch.as_deref().unwrap_or_default())?;
        Ok(Self::new(epoch, repr.version, repr.release)?)
    }
}

impl From<Evr> for EvrRepr {
    fn from(evr: Evr) -> Self {
        Self {
            epoch: evr.epoch.map(|e| e.to_string()),
            version: evr.version,
            release: evr.release,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct NvrRepr {
    name: String,
    #[serde(flatten)]
    evr: EvrRepr,
}

impl TryFrom<NvrRepr> for Nvr {
    type Error = IdentityError;

    fn try_from(repr: NvrRepr) -> Result<Self, Self::Error> {
        Ok(Self::new(repr.name, Evr::try_from(repr.evr)?)?)
    }
}

impl From<Nvr> for NvrRepr {
    fn from(nvr: Nvr) -> Self {
        Self {
            name: nvr.name,
            evr: nvr.evr.into(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct NvraRepr {
    #[serde(flatten)]
    nvr: NvrRepr,
    arch: String,
    /// Derived from `arch`; written for consumers, ignored on input.
    #[serde(default, skip_deserializing)]
    src: bool,
}

impl TryFrom<NvraRepr> for Nvra {
    type Error = IdentityError;

    fn try_from(repr: NvraRepr) -> Result<Self, Self::Error> {
        Ok(Self::new(Nvr::try_from(repr.nvr)?, Arch::new(repr.arch)?))
    }
}

impl From<Nvra> for NvraRepr {
    fn from(nvra: Nvra) -> Self {
        let src = nvra.is_source();
        Self {
            nvr: nvra.nvr.into(),
            arch: nvra.arch.to_string(),
            src,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nvr(name: &str, epoch: Option<&str>, version: &str, release: &str) -> Nvr {
        let epoch = epoch.map(|e| Epoch::new(e).unwrap());
        Nvr::from_parts(name, epoch, version, release).unwrap()
    }

    #[test]
    fn test_evr_validation() {
        assert!(Evr::new(None, "1.0", "1").is_ok());
        assert!(Evr::new(None, "1.0", "").is_ok());
        assert!(Evr::new(None, "", "1").is_err());
        assert!(Evr::new(None, "1-0", "1").is_err());
        assert!(Evr::new(None, "1.0", "1:2").is_err());
        assert!(Evr::new(None, "1 0", "1").is_err());
    }

    #[test]
    fn test_nvr_validation() {
        assert!(Nvr::from_parts("openmpi-1.10", None, "1.10.2", "2.el6").is_ok());
        assert!(Nvr::from_parts("", None, "1", "1").is_err());
        assert!(Nvr::from_parts("a:b", None, "1", "1").is_err());
        assert!(Nvr::from_parts("a/b", None, "1", "1").is_err());
        let err = Nvr::from_parts("a", None, "1", "").unwrap_err();
        assert_eq!(err.field, "release");
    }

    #[test]
    fn test_accessors() {
        let nvra = Nvra::new(
            nvr("net-snmp", Some("1"), "5.3.2.2", "5.el5"),
            Arch::new("src").unwrap(),
        );
        assert_eq!(nvra.name(), "net-snmp");
        assert_eq!(nvra.epoch().map(Epoch::as_str), Some("1"));
        assert_eq!(nvra.version(), "5.3.2.2");
        assert_eq!(nvra.release(), "5.el5");
        assert_eq!(nvra.arch().as_str(), "src");
        assert!(nvra.is_source());
    }

    #[test]
    fn test_display_hides_zero_epoch() {
        assert_eq!(nvr("a", Some("0"), "1", "1").to_string(), "a-1-1");
        assert_eq!(nvr("a", None, "1", "1").to_string(), "a-1-1");
        assert_eq!(nvr("a", Some("2"), "1", "1").to_string(), "a-2:1-1");
        let evr = Evr::new(Some(Epoch::from(3)), "5", "").unwrap();
        assert_eq!(evr.to_string(), "3:5");
    }

    #[test]
    fn test_serde_shape() {
        let nvra = Nvra::new(nvr("bash", None, "5.2", "1.fc39"), Arch::new("src").unwrap());
        let json = serde_json::to_value(&nvra).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "bash",
                "epoch": null,
                "version": "5.2",
                "release": "1.fc39",
                "arch": "src",
                "src": true,
            })
        );
        let back: Nvra = serde_json::from_value(json).unwrap();
        assert_eq!(back, nvra);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let bad = serde_json::json!({"name": "a", "version": "1-2", "release": "1"});
        assert!(serde_json::from_value::<Nvr>(bad).is_err());
        let bad_epoch = serde_json::json!({"epoch": "x", "version": "1", "release": "1"});
        assert!(serde_json::from_value::<Evr>(bad_epoch).is_err());
    }

    #[test]
    fn test_serde_empty_epoch_is_absent() {
        let evr: Evr =
            serde_json::from_value(serde_json::json!({"epoch": "", "version": "1"})).unwrap();
        assert_eq!(evr.epoch(), None);
        assert_eq!(evr.release(), "");
    }
}
