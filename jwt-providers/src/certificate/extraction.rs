use std::{fs, path::Path};

use elliptic_curve::{
    sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint},
    AffinePoint, CurveArithmetic, FieldBytesSize, PublicKey, SecretKey,
};
use jwt_crypto::{Encoding, RawKeyPair};
use p256::NistP256;
use p384::NistP384;
use p521::NistP521;
use pkcs8::{AssociatedOid, ObjectIdentifier, PrivateKeyInfo, SecretDocument};
use sec1::EcPrivateKey;

use super::error::CertificateError;

const PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";

/// Reads a normalized PKCS#8 PEM file into the raw key interchange form.
pub(super) fn read_raw_keys(path: &Path) -> Result<RawKeyPair, CertificateError> {
    let pem =
        fs::read_to_string(path).map_err(|e| CertificateError::CannotNormalize(e.to_string()))?;

    let (label, document) = SecretDocument::from_pem(&pem)
        .map_err(|e| CertificateError::CannotReadPrivateKey(e.to_string()))?;
    if label != PRIVATE_KEY_LABEL {
        return Err(CertificateError::CannotReadPrivateKey(format!(
            "unexpected PEM label `{label}`"
        )));
    }

    let info = PrivateKeyInfo::try_from(document.as_bytes())
        .map_err(|e| CertificateError::CannotReadPrivateKey(e.to_string()))?;

    if info.algorithm.oid != elliptic_curve::ALGORITHM_OID {
        return Err(CertificateError::NoEcKey(info.algorithm.oid.to_string()));
    }

    let ec_key = EcPrivateKey::try_from(info.private_key)
        .map_err(|e| CertificateError::CannotExtractPrivateKey(e.to_string()))?;

    let curve = info
        .algorithm
        .parameters_oid()
        .ok()
        .or_else(|| ec_key.parameters.as_ref().and_then(|params| params.named_curve()))
        .ok_or_else(|| CertificateError::NoEcKey("missing named curve".to_owned()))?;

    raw_keys_for_curve(curve, &ec_key)
}

fn raw_keys_for_curve(
    curve: ObjectIdentifier,
    ec_key: &EcPrivateKey<'_>,
) -> Result<RawKeyPair, CertificateError> {
    if curve == NistP256::OID {
        extract_curve_keys::<NistP256>(ec_key)
    } else if curve == NistP384::OID {
        extract_curve_keys::<NistP384>(ec_key)
    } else if curve == NistP521::OID {
        extract_curve_keys::<NistP521>(ec_key)
    } else {
        Err(CertificateError::NoEcKey(format!("unsupported curve `{curve}`")))
    }
}

fn extract_curve_keys<C>(ec_key: &EcPrivateKey<'_>) -> Result<RawKeyPair, CertificateError>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let secret_key = SecretKey::<C>::from_slice(ec_key.private_key)
        .map_err(|e| CertificateError::CannotExtractPrivateKey(e.to_string()))?;

    // keys without an embedded point get it derived from the scalar
    let public_key = match ec_key.public_key {
        Some(point) => PublicKey::<C>::from_sec1_bytes(point)
            .map_err(|e| CertificateError::CannotExtractPublicKey(e.to_string()))?,
        None => secret_key.public_key(),
    };

    let scalar = secret_key.to_bytes();
    let significant = scalar
        .iter()
        .position(|byte| *byte != 0)
        .unwrap_or(scalar.len());

    let mut private = Vec::with_capacity(scalar.len() - significant + 1);
    private.push(0x00);
    private.extend_from_slice(&scalar[significant..]);

    let private = Encoding::Base64
        .encode(&private)
        .map_err(|e| CertificateError::CannotExtractPrivateKey(e.to_string()))?;
    let public = Encoding::Base64
        .encode(public_key.to_encoded_point(false).as_bytes())
        .map_err(|e| CertificateError::CannotExtractPublicKey(e.to_string()))?;

    Ok(RawKeyPair::new(private, public))
}
