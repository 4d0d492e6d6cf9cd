//! Identity formatter.
//!
//! Canonical strings are used as cache and index keys by downstream tools,
//! so the epoch display rules below must not drift.

use nvr_schema::{EPOCH_SEPARATOR, Epoch, Evr, FIELD_SEPARATOR, Nvr, Nvra, RPM_SUFFIX};

/// When to render the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EpochPolicy {
    /// Never render the epoch, whatever is stored.
    #[default]
    Omit,
    /// Render the epoch only when it is set and not zero.
    NonZero,
    /// Always render the epoch, substituting `0` when none is set.
    Always,
}

impl EpochPolicy {
    /// Map the `add_epoch`/`force_epoch` flag pair onto a policy.
    /// `force_epoch` wins over `add_epoch`.
    pub fn from_flags(add_epoch: bool, force_epoch: bool) -> Self {
        match (add_epoch, force_epoch) {
            (_, true) => Self::Always,
            (true, false) => Self::NonZero,
            (false, false) => Self::Omit,
        }
    }

    /// The epoch text to render for `epoch`, if any.
    pub fn render(self, epoch: Option<&Epoch>) -> Option<&str> {
        match (self, epoch) {
            (Self::Omit, _) | (Self::NonZero, None) => None,
            (Self::NonZero, Some(e)) if e.is_zero() => None,
            (Self::NonZero | Self::Always, Some(e)) => Some(e.as_str()),
            (Self::Always, None) => Some("0"),
        }
    }

    /// Stable lowercase name, as accepted by [`FromStr`](std::str::FromStr).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Omit => "omit",
            Self::NonZero => "non-zero",
            Self::Always => "always",
        }
    }
}

impl std::fmt::Display for EpochPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EpochPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "omit" | "never" => Ok(Self::Omit),
            "non-zero" | "nonzero" | "add" => Ok(Self::NonZero),
            "always" | "force" => Ok(Self::Always),
            _ => Err(format!("Unknown epoch policy: {s}")),
        }
    }
}

fn push_evr(out: &mut String, evr: &Evr, policy: EpochPolicy) {
    if let Some(epoch) = policy.render(evr.epoch()) {
        out.push_str(epoch);
        out.push(EPOCH_SEPARATOR);
    }
    out.push_str(evr.version());
    if evr.has_release() {
        out.push(FIELD_SEPARATOR);
        out.push_str(evr.release());
    }
}

/// Render `[E:]version[-release]`.
///
/// The release (and its dash) is left out when it is empty, so the output
/// parses back with `parse_evr(_, true)`.
pub fn make_evr(evr: &Evr, policy: EpochPolicy) -> String {
    let mut out = String::with_capacity(evr.version().len() + evr.release().len() + 4);
    push_evr(&mut out, evr, policy);
    out
}

/// Render `name-[E:]version-release`. Accepts an [`Nvr`] or an [`Nvra`]
/// (whose arch is then ignored).
///
/// # Example
///
/// ```
/// use nvr_core::{EpochPolicy, make_nvr, parse_nvr};
///
/// let nvr = parse_nvr("a-1-1").unwrap();
/// assert_eq!(make_nvr(&nvr, EpochPolicy::from_flags(true, false)), "a-1-1");
/// assert_eq!(make_nvr(&nvr, EpochPolicy::from_flags(false, true)), "a-0:1-1");
/// ```
pub fn make_nvr<R: AsRef<Nvr>>(record: &R, policy: EpochPolicy) -> String {
    let nvr = record.as_ref();
    let mut out = String::with_capacity(nvr.name().len() + 32);
    out.push_str(nvr.name());
    out.push(FIELD_SEPARATOR);
    push_evr(&mut out, nvr.evr(), policy);
    out
}

/// Render `name-[E:]version-release.arch[.rpm]`.
pub fn make_nvra(nvra: &Nvra, policy: EpochPolicy, add_rpm: bool) -> String {
    let mut out = make_nvr(nvra, policy);
    out.push('.');
    out.push_str(nvra.arch().as_str());
    if add_rpm {
        out.push_str(RPM_SUFFIX);
    }
    out
}
