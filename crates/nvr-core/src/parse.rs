//! Identity parser.
//!
//! The grammar is ambiguous on purpose: names may contain dashes and
//! digits, and the epoch may sit in three different places. It is resolved
//! with fixed right-anchored splits, never by searching:
//!
//! - everything up to the last `/` is a path and is dropped (NVR, NVRA);
//! - the epoch position is classified once, up front ([`EpochSite`]);
//! - the last two `-` tokens are version and release, the rest is name;
//! - for NVRA the release additionally loses its last `.` token to arch.

use std::borrow::Cow;

use tracing::{debug, trace};

use nvr_schema::{
    Arch, EPOCH_SEPARATOR, Epoch, Evr, FIELD_SEPARATOR, IdentityError, MalformedReason, Nvr, Nvra,
    RPM_SUFFIX,
};

const NVR_SHAPE: &str = "name-version-release";
const EVR_SHAPE: &str = "version-release";

/// Where the epoch sits in an identity string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EpochSite<'a> {
    /// No colon at all.
    Absent,
    /// `E:name-version-release`
    Leading { epoch: &'a str, body: &'a str },
    /// `name-E:version-release`
    BeforeVersion {
        name: &'a str,
        epoch: &'a str,
        tail: &'a str,
    },
    /// `name-version-release:E`
    Trailing { body: &'a str, epoch: &'a str },
}

impl<'a> EpochSite<'a> {
    /// Classify the single colon of `s`, if any.
    ///
    /// Which side of the colon holds dashes decides the position. With no
    /// dashes on either side (`1:5`, `5.3:1`) a numeric left side is taken
    /// as a leading epoch, anything else as a trailing one.
    fn classify(s: &'a str) -> Result<Self, MalformedReason> {
        let Some((before, after)) = s.split_once(EPOCH_SEPARATOR) else {
            return Ok(Self::Absent);
        };
        if after.contains(EPOCH_SEPARATOR) {
            return Err(MalformedReason::MultipleEpochs);
        }

        let site = match (
            before.contains(FIELD_SEPARATOR),
            after.contains(FIELD_SEPARATOR),
        ) {
            (false, true) => Self::Leading {
                epoch: before,
                body: after,
            },
            (true, false) => Self::Trailing {
                body: before,
                epoch: after,
            },
            (true, true) => {
                // The colon must sit in the version token: exactly one dash
                // (version-release) may follow it.
                if after.matches(FIELD_SEPARATOR).count() != 1 {
                    return Err(MalformedReason::MisplacedEpoch);
                }
                match before.rsplit_once(FIELD_SEPARATOR) {
                    Some((name, epoch)) => Self::BeforeVersion {
                        name,
                        epoch,
                        tail: after,
                    },
                    None => return Err(MalformedReason::MisplacedEpoch),
                }
            }
            (false, false) if is_digits(before) => Self::Leading {
                epoch: before,
                body: after,
            },
            (false, false) => Self::Trailing {
                body: before,
                epoch: after,
            },
        };
        Ok(site)
    }

    fn epoch(&self) -> Option<&'a str> {
        match *self {
            Self::Absent => None,
            Self::Leading { epoch, .. }
            | Self::BeforeVersion { epoch, .. }
            | Self::Trailing { epoch, .. } => Some(epoch),
        }
    }

    /// The identity with the epoch (and its colon) removed.
    fn body(&self, s: &'a str) -> Cow<'a, str> {
        match *self {
            Self::Absent => Cow::Borrowed(s),
            Self::Leading { body, .. } | Self::Trailing { body, .. } => Cow::Borrowed(body),
            Self::BeforeVersion { name, tail, .. } => {
                Cow::Owned(format!("{name}{FIELD_SEPARATOR}{tail}"))
            }
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn reject(input: &str, reason: MalformedReason) -> IdentityError {
    debug!(input, %reason, "rejected identity");
    IdentityError::malformed(input, reason)
}

/// Drop any leading path: `/foo/bar/name-1-1` becomes `name-1-1`.
fn strip_path(s: &str) -> &str {
    s.rsplit_once('/').map_or(s, |(_, base)| base)
}

/// Locate and validate the epoch, returning it with the epoch-free body.
fn split_epoch<'a>(
    input: &str,
    s: &'a str,
    allow_before_version: bool,
) -> Result<(Option<Epoch>, Cow<'a, str>), IdentityError> {
    let site = EpochSite::classify(s).map_err(|reason| reject(input, reason))?;
    trace!(input, ?site, "located epoch");

    if !allow_before_version && matches!(site, EpochSite::BeforeVersion { .. }) {
        return Err(reject(input, MalformedReason::MisplacedEpoch));
    }

    let epoch = match site.epoch() {
        Some(raw) => Some(
            Epoch::new(raw)
                .map_err(|_| reject(input, MalformedReason::NonNumericEpoch(raw.to_string())))?,
        ),
        None => None,
    };
    Ok((epoch, site.body(s)))
}

/// Claim the last two dash tokens as version and release.
fn split_nvr<'a>(input: &str, body: &'a str) -> Result<(&'a str, &'a str, &'a str), IdentityError> {
    let mut tokens = body.rsplitn(3, FIELD_SEPARATOR);
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(release), Some(version), Some(name)) => Ok((name, version, release)),
        _ => Err(reject(
            input,
            MalformedReason::TooFewFields {
                expected: NVR_SHAPE,
            },
        )),
    }
}

fn invalid_field(input: &str) -> impl FnOnce(nvr_schema::FieldError) -> IdentityError + '_ {
    move |err| reject(input, MalformedReason::InvalidField(err))
}

/// Parse `[path/][E:]name-[E:]version-release[:E]`.
///
/// # Errors
///
/// Returns [`IdentityError::Malformed`] when fewer than three dash tokens
/// remain, when more than one colon is present, when the epoch is not
/// numeric or not in one of the three allowed positions, or when a field is
/// empty or contains whitespace.
///
/// # Example
///
/// ```
/// use nvr_core::parse_nvr;
///
/// let nvr = parse_nvr("openmpi-1.10-1.10.2-2.el6").unwrap();
/// assert_eq!(nvr.name(), "openmpi-1.10");
/// assert_eq!(nvr.version(), "1.10.2");
/// assert_eq!(nvr.release(), "2.el6");
/// ```
pub fn parse_nvr(s: &str) -> Result<Nvr, IdentityError> {
    let (epoch, body) = split_epoch(s, strip_path(s), true)?;
    let (name, version, release) = split_nvr(s, &body)?;
    Nvr::from_parts(name, epoch, version, release).map_err(invalid_field(s))
}

/// Parse `[path/][E:]name-[E:]version-release.arch[.rpm][:E][.rpm]`.
///
/// The `.rpm` suffix is accepted on either side of a trailing epoch, so
/// both `...i386.rpm:1` and `...i386:1.rpm` resolve to the same record.
/// The second form is odd but established; it is kept as accepted input.
///
/// # Errors
///
/// Everything [`parse_nvr`] rejects, plus a release without a `.arch`
/// suffix ([`MalformedReason::MissingArch`]).
pub fn parse_nvra(s: &str) -> Result<Nvra, IdentityError> {
    let base = strip_path(s);
    let (base, had_rpm) = match base.strip_suffix(RPM_SUFFIX) {
        Some(stripped) => (stripped, true),
        None => (base, false),
    };

    let (epoch, body) = split_epoch(s, base, true)?;
    let body: &str = &body;
    let body = if had_rpm {
        body
    } else {
        body.strip_suffix(RPM_SUFFIX).unwrap_or(body)
    };

    let (name, version, release_arch) = split_nvr(s, body)?;
    let (release, arch) = release_arch
        .rsplit_once('.')
        .ok_or_else(|| reject(s, MalformedReason::MissingArch))?;

    let nvr = Nvr::from_parts(name, epoch, version, release).map_err(invalid_field(s))?;
    let arch = Arch::new(arch).map_err(invalid_field(s))?;
    Ok(Nvra::new(nvr, arch))
}

/// Parse `[E:]version-release[:E]`, or `[E:]version[:E]` when
/// `allow_empty_release` is set (the release is then empty).
///
/// No path stripping is done; an EVR is never a file name.
///
/// # Errors
///
/// Returns [`IdentityError::Malformed`] when the release is missing and not
/// allowed to be, when more than one dash is present, when the epoch is
/// repeated or non-numeric, or when a field contains whitespace.
///
/// # Example
///
/// ```
/// use nvr_core::parse_evr;
///
/// let evr = parse_evr("5.3.2.2:1", true).unwrap();
/// assert_eq!(evr.epoch().map(|e| e.as_str()), Some("1"));
/// assert_eq!(evr.version(), "5.3.2.2");
/// assert_eq!(evr.release(), "");
/// ```
pub fn parse_evr(s: &str, allow_empty_release: bool) -> Result<Evr, IdentityError> {
    let (epoch, body) = split_epoch(s, s, false)?;

    let (version, release) = match body.split_once(FIELD_SEPARATOR) {
        Some((_, "")) => {
            return Err(reject(
                s,
                MalformedReason::TooFewFields {
                    expected: EVR_SHAPE,
                },
            ));
        }
        Some((_, release)) if release.contains(FIELD_SEPARATOR) => {
            return Err(reject(
                s,
                MalformedReason::TooManyFields {
                    expected: EVR_SHAPE,
                },
            ));
        }
        Some((version, release)) => (version, release),
        None if allow_empty_release => (&*body, ""),
        None => {
            return Err(reject(
                s,
                MalformedReason::TooFewFields {
                    expected: EVR_SHAPE,
                },
            ));
        }
    };

    Evr::new(epoch, version, release).map_err(invalid_field(s))
}

/// Split a leading `E:` or trailing `:E` epoch off an identity string.
///
/// The rest of the string is returned untouched, so this works for NVR and
/// NVRA strings alike. An epoch placed before the version is not an
/// "identity plus epoch" and is rejected.
///
/// # Errors
///
/// Returns [`IdentityError::Malformed`] for repeated, misplaced or
/// non-numeric epochs.
///
/// # Example
///
/// ```
/// use nvr_core::split_nvr_epoch;
///
/// let (nvr, epoch) = split_nvr_epoch("net-snmp-5.3.2.2-5.el5:1").unwrap();
/// assert_eq!(nvr, "net-snmp-5.3.2.2-5.el5");
/// assert_eq!(epoch.unwrap().as_str(), "1");
/// ```
pub fn split_nvr_epoch(s: &str) -> Result<(String, Option<Epoch>), IdentityError> {
    let (epoch, body) = split_epoch(s, s, false)?;
    Ok((body.into_owned(), epoch))
}
