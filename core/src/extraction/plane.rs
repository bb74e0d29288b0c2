use crate::document::AttrBag;
use crate::error::Result;
use crate::types::PlaneMetadata;

use super::attrs::{
    self, get_f64, get_string_or, require_u32, DEFAULT_POSITION_UNIT, DEFAULT_TIME_UNIT,
};

/// Extracts the metadata record for a single plane
///
/// The three dimension indices (`TheC`/`TheT`/`TheZ`) are required;
/// `series_id` is carried into the error context.
pub fn extract_plane(bag: &AttrBag, series_id: &str) -> Result<PlaneMetadata> {
    let context = format!("{}/Plane", series_id);

    Ok(PlaneMetadata {
        c: require_u32(bag, attrs::THE_C, &context)?,
        t: require_u32(bag, attrs::THE_T, &context)?,
        z: require_u32(bag, attrs::THE_Z, &context)?,
        time_interval: get_f64(bag, attrs::DELTA_T)?,
        time_unit: get_string_or(bag, attrs::DELTA_T_UNIT, DEFAULT_TIME_UNIT),
        exposure_time: get_f64(bag, attrs::EXPOSURE_TIME)?,
        exposure_time_unit: get_string_or(bag, attrs::EXPOSURE_TIME_UNIT, DEFAULT_TIME_UNIT),
        stage_x: get_f64(bag, attrs::POSITION_X)?,
        stage_x_unit: get_string_or(bag, attrs::POSITION_X_UNIT, DEFAULT_POSITION_UNIT),
        stage_y: get_f64(bag, attrs::POSITION_Y)?,
        stage_y_unit: get_string_or(bag, attrs::POSITION_Y_UNIT, DEFAULT_POSITION_UNIT),
        stage_z: get_f64(bag, attrs::POSITION_Z)?,
        stage_z_unit: get_string_or(bag, attrs::POSITION_Z_UNIT, DEFAULT_POSITION_UNIT),
    })
}
