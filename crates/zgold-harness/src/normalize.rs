//! Equality normalizer: the single sanctioned relaxation of exactness.
//!
//! The gzip header records the producing platform in a one-byte OS field.
//! That byte is legitimately host-dependent, so when a scenario requests it,
//! the reference's OS byte is overwritten with the actual output's — at that
//! exact offset, for that one format, and nowhere else.  Any other divergence
//! must still fail.  Adding further exceptions without a format justification
//! is a design smell to flag in review.

use std::borrow::Cow;

use zgold_error::{HarnessError, Result};
use zgold_types::{EncodeOptions, EncoderVariant};

/// Offset of the OS-identifier byte in a gzip member header.
///
/// Fixed at 9 for the base 10-byte header (magic, CM, FLG, MTIME, XFL, OS).
pub const GZIP_OS_BYTE_OFFSET: usize = 9;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const GZIP_CM_DEFLATE: u8 = 0x08;
/// FLG bit announcing an extra field after the base header.
const GZIP_FLG_FEXTRA: u8 = 0x04;
/// FLG bits reserved by the gzip specification; must be zero.
const GZIP_FLG_RESERVED: u8 = 0xe0;

/// Apply at most one permitted positional override before comparison.
///
/// With `ignore_os_byte` unset the reference is returned unchanged
/// (borrowed).  With it set, a copy of the reference is produced with the
/// byte at [`GZIP_OS_BYTE_OFFSET`] overwritten from `actual`; the loaded
/// reference itself is never mutated, so it stays available for diagnostics.
///
/// # Errors
///
/// `NormalizerMisuse` when the override is requested for a variant whose
/// format has no OS field — a malformed matrix, caught before any byte is
/// touched.  `MalformedGzipHeader` when the reference violates the
/// override's preconditions.
pub fn normalize<'a>(
    reference: &'a [u8],
    actual: &[u8],
    options: &EncodeOptions,
    variant: EncoderVariant,
) -> Result<Cow<'a, [u8]>> {
    if !options.ignore_os_byte {
        return Ok(Cow::Borrowed(reference));
    }
    if !variant.has_os_byte() {
        return Err(HarnessError::NormalizerMisuse {
            variant: variant.to_string(),
        });
    }
    override_os_byte(reference, actual).map(Cow::Owned)
}

/// Pure positional override: copy `actual`'s OS byte into a copy of
/// `reference`.
///
/// Header preconditions apply to the reference only.  The fixture is trusted
/// ground truth, so a reference that is too short, lacks the gzip magic or
/// deflate CM byte, sets reserved FLG bits, or announces an FEXTRA extension
/// is a configuration fault: the fixed-offset assumption was only ever
/// verified against extension-free base headers.  The actual output is the
/// thing under test and gets no such gate — it only has to be long enough to
/// source the byte.  When it is not, the reference is returned unpatched and
/// the comparison fails on its own terms, as a mismatch verdict.
///
/// # Errors
///
/// `MalformedGzipHeader` when the reference violates the preconditions
/// above.
pub fn override_os_byte(reference: &[u8], actual: &[u8]) -> Result<Vec<u8>> {
    check_reference_preconditions(reference)?;

    let mut patched = reference.to_vec();
    if let Some(&os) = actual.get(GZIP_OS_BYTE_OFFSET) {
        patched[GZIP_OS_BYTE_OFFSET] = os;
    }
    Ok(patched)
}

fn check_reference_preconditions(bytes: &[u8]) -> Result<()> {
    if bytes.len() <= GZIP_OS_BYTE_OFFSET {
        return Err(HarnessError::MalformedGzipHeader {
            detail: format!(
                "reference is {} bytes, shorter than the base gzip header",
                bytes.len()
            ),
        });
    }
    if bytes[0..2] != GZIP_MAGIC {
        return Err(HarnessError::MalformedGzipHeader {
            detail: format!(
                "reference lacks gzip magic: found {:02x} {:02x}",
                bytes[0], bytes[1]
            ),
        });
    }
    if bytes[2] != GZIP_CM_DEFLATE {
        return Err(HarnessError::MalformedGzipHeader {
            detail: format!(
                "reference has compression method {:#04x}, expected deflate",
                bytes[2]
            ),
        });
    }
    let flg = bytes[3];
    if flg & GZIP_FLG_FEXTRA != 0 {
        return Err(HarnessError::MalformedGzipHeader {
            detail: format!("reference announces an extra field (FLG={flg:#04x}); os-byte override not verified for extended headers"),
        });
    }
    if flg & GZIP_FLG_RESERVED != 0 {
        return Err(HarnessError::MalformedGzipHeader {
            detail: format!("reference sets reserved FLG bits ({flg:#04x})"),
        });
    }
    Ok(())
}
