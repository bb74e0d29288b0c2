use crate::document::AttrBag;
use crate::error::{OmeMetaError, Result};

// Image attributes
pub const ID: &str = "ID";
pub const NAME: &str = "Name";

// Pixels attributes
pub const DIMENSION_ORDER: &str = "DimensionOrder";
pub const PIXEL_TYPE: &str = "Type";
pub const SIGNIFICANT_BITS: &str = "SignificantBits";
pub const INTERLEAVED: &str = "Interleaved";
pub const BIG_ENDIAN: &str = "BigEndian";
pub const SIZE_X: &str = "SizeX";
pub const SIZE_Y: &str = "SizeY";
pub const SIZE_Z: &str = "SizeZ";
pub const SIZE_C: &str = "SizeC";
pub const SIZE_T: &str = "SizeT";
pub const PHYSICAL_SIZE_X: &str = "PhysicalSizeX";
pub const PHYSICAL_SIZE_X_UNIT: &str = "PhysicalSizeXUnit";
pub const PHYSICAL_SIZE_Y: &str = "PhysicalSizeY";
pub const PHYSICAL_SIZE_Y_UNIT: &str = "PhysicalSizeYUnit";
pub const PHYSICAL_SIZE_Z: &str = "PhysicalSizeZ";
pub const PHYSICAL_SIZE_Z_UNIT: &str = "PhysicalSizeZUnit";
pub const TIME_INCREMENT: &str = "TimeIncrement";
pub const TIME_INCREMENT_UNIT: &str = "TimeIncrementUnit";

// Channel attributes
pub const SAMPLES_PER_PIXEL: &str = "SamplesPerPixel";
pub const ILLUMINATION_TYPE: &str = "IlluminationType";
pub const PINHOLE_SIZE: &str = "PinholeSize";
pub const PINHOLE_SIZE_UNIT: &str = "PinholeSizeUnit";
pub const ACQUISITION_MODE: &str = "AcquisitionMode";
pub const CONTRAST_METHOD: &str = "ContrastMethod";
pub const EXCITATION_WAVELENGTH: &str = "ExcitationWavelength";
pub const EXCITATION_WAVELENGTH_UNIT: &str = "ExcitationWavelengthUnit";
pub const EMISSION_WAVELENGTH: &str = "EmissionWavelength";
pub const EMISSION_WAVELENGTH_UNIT: &str = "EmissionWavelengthUnit";
pub const FLUOR: &str = "Fluor";
pub const ND_FILTER: &str = "NDFilter";
pub const POCKEL_CELL_SETTING: &str = "PockelCellSetting";
pub const COLOR: &str = "Color";

// Plane attributes
pub const THE_C: &str = "TheC";
pub const THE_T: &str = "TheT";
pub const THE_Z: &str = "TheZ";
pub const DELTA_T: &str = "DeltaT";
pub const DELTA_T_UNIT: &str = "DeltaTUnit";
pub const EXPOSURE_TIME: &str = "ExposureTime";
pub const EXPOSURE_TIME_UNIT: &str = "ExposureTimeUnit";
pub const POSITION_X: &str = "PositionX";
pub const POSITION_X_UNIT: &str = "PositionXUnit";
pub const POSITION_Y: &str = "PositionY";
pub const POSITION_Y_UNIT: &str = "PositionYUnit";
pub const POSITION_Z: &str = "PositionZ";
pub const POSITION_Z_UNIT: &str = "PositionZUnit";

// Unit defaults applied when the document omits a unit attribute
pub const DEFAULT_LENGTH_UNIT: &str = "µm";
pub const DEFAULT_WAVELENGTH_UNIT: &str = "nm";
pub const DEFAULT_TIME_UNIT: &str = "s";
pub const DEFAULT_POSITION_UNIT: &str = "reference frame";

/// Helper to get an optional string attribute
pub fn get_string(bag: &AttrBag, name: &str) -> Option<String> {
    bag.get(name).map(|s| s.trim().to_string())
}

/// Helper to get a string attribute with a fallback default
pub fn get_string_or(bag: &AttrBag, name: &str, default: &str) -> String {
    get_string(bag, name).unwrap_or_else(|| default.to_string())
}

/// Helper to get an optional u32 attribute
///
/// Returns `Ok(None)` if the attribute is absent, or `InvalidValue` if it
/// is present but not a non-negative integer.
pub fn get_u32(bag: &AttrBag, name: &str) -> Result<Option<u32>> {
    parse_opt(bag, name)
}

/// Helper to get an optional u16 attribute
pub fn get_u16(bag: &AttrBag, name: &str) -> Result<Option<u16>> {
    parse_opt(bag, name)
}

/// Helper to get an optional i32 attribute
pub fn get_i32(bag: &AttrBag, name: &str) -> Result<Option<i32>> {
    parse_opt(bag, name)
}

/// Helper to get an optional f64 attribute
pub fn get_f64(bag: &AttrBag, name: &str) -> Result<Option<f64>> {
    parse_opt(bag, name)
}

/// Helper to get an optional xsd:boolean attribute ("true"/"false"/"1"/"0")
pub fn get_bool(bag: &AttrBag, name: &str) -> Result<Option<bool>> {
    match bag.get(name) {
        None => Ok(None),
        Some(raw) => match raw.trim() {
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            other => Err(OmeMetaError::InvalidValue(format!(
                "@{}: '{}' is not a boolean",
                name, other
            ))),
        },
    }
}

/// Helper to get a required string attribute
///
/// `context` names the owning element (and its id where known) so the
/// error points at the series that failed.
pub fn require_string(bag: &AttrBag, name: &str, context: &str) -> Result<String> {
    get_string(bag, name)
        .ok_or_else(|| OmeMetaError::SeriesFieldMissing(format!("{}/@{}", context, name)))
}

/// Helper to get a required u32 attribute
pub fn require_u32(bag: &AttrBag, name: &str, context: &str) -> Result<u32> {
    parse_opt(bag, name)?
        .ok_or_else(|| OmeMetaError::SeriesFieldMissing(format!("{}/@{}", context, name)))
}

fn parse_opt<T: std::str::FromStr>(bag: &AttrBag, name: &str) -> Result<Option<T>> {
    match bag.get(name) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
            OmeMetaError::InvalidValue(format!("@{}: cannot parse '{}'", name, raw))
        }),
    }
}
