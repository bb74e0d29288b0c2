use crate::document::AttrBag;
use crate::error::Result;
use crate::types::ChannelMetadata;

use super::attrs::{
    self, get_f64, get_i32, get_string, get_string_or, get_u32, require_string,
    DEFAULT_LENGTH_UNIT, DEFAULT_WAVELENGTH_UNIT,
};

/// Extracts the metadata record for a single channel
///
/// Only the channel id is required; `series_id` is carried into the error
/// context so a failure names the owning series.
pub fn extract_channel(bag: &AttrBag, series_id: &str) -> Result<ChannelMetadata> {
    let context = format!("{}/Channel", series_id);

    Ok(ChannelMetadata {
        id: require_string(bag, attrs::ID, &context)?,
        name: get_string(bag, attrs::NAME),
        samples_per_pixel: get_u32(bag, attrs::SAMPLES_PER_PIXEL)?,
        illumination_type: get_string(bag, attrs::ILLUMINATION_TYPE),
        pinhole_size: get_f64(bag, attrs::PINHOLE_SIZE)?,
        pinhole_size_unit: get_string_or(bag, attrs::PINHOLE_SIZE_UNIT, DEFAULT_LENGTH_UNIT),
        acquisition_mode: get_string(bag, attrs::ACQUISITION_MODE),
        contrast_method: get_string(bag, attrs::CONTRAST_METHOD),
        excitation_wavelength: get_f64(bag, attrs::EXCITATION_WAVELENGTH)?,
        excitation_unit: get_string_or(
            bag,
            attrs::EXCITATION_WAVELENGTH_UNIT,
            DEFAULT_WAVELENGTH_UNIT,
        ),
        emission_wavelength: get_f64(bag, attrs::EMISSION_WAVELENGTH)?,
        emission_unit: get_string_or(
            bag,
            attrs::EMISSION_WAVELENGTH_UNIT,
            DEFAULT_WAVELENGTH_UNIT,
        ),
        fluor: get_string(bag, attrs::FLUOR),
        nd_filter: get_f64(bag, attrs::ND_FILTER)?,
        pockel_cell: get_i32(bag, attrs::POCKEL_CELL_SETTING)?,
        color: parse_color(bag)?,
    })
}

// OME encodes channel color as a signed packed RGBA integer; -1 is white
// and doubles as the value for "not specified".
fn parse_color(bag: &AttrBag) -> Result<i64> {
    match bag.get(attrs::COLOR) {
        None => Ok(-1),
        Some(raw) => raw.trim().parse().map_err(|_| {
            crate::error::OmeMetaError::InvalidValue(format!(
                "@{}: cannot parse '{}'",
                attrs::COLOR,
                raw
            ))
        }),
    }
}
