/// Metadata for a single channel of a series (`Pixels/Channel`)
///
/// Wavelengths default to nanometres and the pinhole size to micrometres
/// when the source document omits the unit attributes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ChannelMetadata {
    /// Channel identifier (`Channel/@ID`)
    pub id: String,

    /// Human-readable channel name
    pub name: Option<String>,

    /// Samples per pixel for this channel
    pub samples_per_pixel: Option<u32>,

    /// Illumination type, e.g. "Epifluorescence"
    pub illumination_type: Option<String>,

    /// Pinhole diameter
    pub pinhole_size: Option<f64>,
    pub pinhole_size_unit: String,

    /// Acquisition mode, e.g. "LaserScanningConfocalMicroscopy"
    pub acquisition_mode: Option<String>,

    /// Contrast method, e.g. "Fluorescence"
    pub contrast_method: Option<String>,

    /// Excitation wavelength
    pub excitation_wavelength: Option<f64>,
    pub excitation_unit: String,

    /// Emission wavelength
    pub emission_wavelength: Option<f64>,
    pub emission_unit: String,

    /// Fluorophore name
    pub fluor: Option<String>,

    /// Neutral density filter optical density
    pub nd_filter: Option<f64>,

    /// Pockel cell setting
    pub pockel_cell: Option<i32>,

    /// Display color as a packed RGBA integer; -1 (white) when absent
    pub color: i64,
}

impl ChannelMetadata {
    /// Checks if this channel records a fluorescence emission wavelength
    pub fn has_emission(&self) -> bool {
        self.emission_wavelength.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_emission() {
        let channel = ChannelMetadata {
            id: "Channel:0:0".to_string(),
            name: Some("DAPI".to_string()),
            samples_per_pixel: Some(1),
            illumination_type: None,
            pinhole_size: None,
            pinhole_size_unit: "µm".to_string(),
            acquisition_mode: None,
            contrast_method: None,
            excitation_wavelength: Some(358.0),
            excitation_unit: "nm".to_string(),
            emission_wavelength: Some(461.0),
            emission_unit: "nm".to_string(),
            fluor: None,
            nd_filter: None,
            pockel_cell: None,
            color: -1,
        };
        assert!(channel.has_emission());

        let mut no_emission = channel.clone();
        no_emission.emission_wavelength = None;
        assert!(!no_emission.has_emission());
    }
}
