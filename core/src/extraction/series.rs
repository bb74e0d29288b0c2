use crate::document::RawSeries;
use crate::error::{OmeMetaError, Result};
use crate::extraction::channel::extract_channel;
use crate::extraction::plane::extract_plane;
use crate::types::SeriesMetadata;

use super::attrs::{
    self, get_bool, get_f64, get_string, get_string_or, get_u16, require_string, require_u32,
    DEFAULT_LENGTH_UNIT, DEFAULT_TIME_UNIT,
};

/// Extracts the metadata record for a single series
///
/// The series identifier, `Pixels` element, dimension order, pixel type,
/// and all five dimension sizes must be present; everything else falls back
/// to `None` or the schema's default unit.
///
/// # Errors
///
/// Returns `SeriesFieldMissing` when a required attribute or the `Pixels`
/// element is absent, and `InvalidValue` when an attribute is present but
/// unparseable.
pub fn extract_series(raw: &RawSeries) -> Result<SeriesMetadata> {
    let id = require_string(&raw.attrs, attrs::ID, "Image")?;

    let pixels = raw.pixels.as_ref().ok_or_else(|| {
        OmeMetaError::SeriesFieldMissing(format!("{}: no Pixels element", id))
    })?;
    let context = format!("{}/Pixels", id);

    Ok(SeriesMetadata {
        name: get_string(&raw.attrs, attrs::NAME),
        pixel_id: require_string(&pixels.attrs, attrs::ID, &context)?,
        dimension_order: require_string(&pixels.attrs, attrs::DIMENSION_ORDER, &context)?,
        pixel_type: require_string(&pixels.attrs, attrs::PIXEL_TYPE, &context)?,
        significant_bits: get_u16(&pixels.attrs, attrs::SIGNIFICANT_BITS)?,
        interleaved: get_bool(&pixels.attrs, attrs::INTERLEAVED)?,
        big_endian: get_bool(&pixels.attrs, attrs::BIG_ENDIAN)?,
        sizex: require_u32(&pixels.attrs, attrs::SIZE_X, &context)?,
        sizey: require_u32(&pixels.attrs, attrs::SIZE_Y, &context)?,
        sizez: require_u32(&pixels.attrs, attrs::SIZE_Z, &context)?,
        sizec: require_u32(&pixels.attrs, attrs::SIZE_C, &context)?,
        sizet: require_u32(&pixels.attrs, attrs::SIZE_T, &context)?,
        voxel_size_x: get_f64(&pixels.attrs, attrs::PHYSICAL_SIZE_X)?,
        voxel_unit_x: get_string_or(&pixels.attrs, attrs::PHYSICAL_SIZE_X_UNIT, DEFAULT_LENGTH_UNIT),
        voxel_size_y: get_f64(&pixels.attrs, attrs::PHYSICAL_SIZE_Y)?,
        voxel_unit_y: get_string_or(&pixels.attrs, attrs::PHYSICAL_SIZE_Y_UNIT, DEFAULT_LENGTH_UNIT),
        voxel_size_z: get_f64(&pixels.attrs, attrs::PHYSICAL_SIZE_Z)?,
        voxel_unit_z: get_string_or(&pixels.attrs, attrs::PHYSICAL_SIZE_Z_UNIT, DEFAULT_LENGTH_UNIT),
        time_increment: get_f64(&pixels.attrs, attrs::TIME_INCREMENT)?,
        time_unit: get_string_or(&pixels.attrs, attrs::TIME_INCREMENT_UNIT, DEFAULT_TIME_UNIT),
        channels: pixels
            .channels
            .iter()
            .map(|c| extract_channel(c, &id))
            .collect::<Result<Vec<_>>>()?,
        planes: pixels
            .planes
            .iter()
            .map(|p| extract_plane(p, &id))
            .collect::<Result<Vec<_>>>()?,
        id,
    })
}
