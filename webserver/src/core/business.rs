//! Business snapshot assembly

use shared::{BusinessInput, BusinessSnapshot, ValidationResult};

use crate::core::headline::generate_deterministic_headline;

/// Validate the submission and attach the mock rating, reviews and headline
pub fn build_snapshot(input: &BusinessInput) -> ValidationResult<BusinessSnapshot> {
    input.validate()?;
    let headline = generate_deterministic_headline(&input.name, &input.location);
    Ok(BusinessSnapshot::with_headline(headline))
}
