//! Raw model of an OME-XML document
//!
//! This is the multi-series metadata handle backing a series iterator. Only
//! the elements carrying per-series metadata are modeled: `Image`, its
//! `Pixels` child, and the `Channel`/`Plane` children of `Pixels`.
//! Everything else in the document is skipped. Elements are matched by
//! local name, so any OME schema release is accepted regardless of the
//! namespace URI it declares.

use crate::error::{OmeMetaError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Attributes of a single OME element, in document order
#[derive(Debug, Clone, Default)]
pub struct AttrBag {
    attrs: Vec<(String, String)>,
}

impl AttrBag {
    fn from_start(e: &BytesStart) -> Result<Self> {
        let mut attrs = Vec::new();
        for attr in e.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attrs.push((key, value));
        }
        Ok(Self { attrs })
    }

    /// Looks up an attribute value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw `Pixels` element: attributes plus child channels and planes
#[derive(Debug, Clone, Default)]
pub struct RawPixels {
    pub attrs: AttrBag,
    pub channels: Vec<AttrBag>,
    pub planes: Vec<AttrBag>,
}

/// Raw `Image` element: one series
#[derive(Debug, Clone)]
pub struct RawSeries {
    pub attrs: AttrBag,
    pub pixels: Option<RawPixels>,
}

/// Parsed OME document
#[derive(Debug, Clone)]
pub struct OmeDocument {
    series: Vec<RawSeries>,
}

impl OmeDocument {
    /// Parses OME-XML text into the raw document model
    ///
    /// # Errors
    ///
    /// Returns [`OmeMetaError::MetadataUnavailable`] if the text is not
    /// well-formed XML or the root element is not `OME`.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);

        let mut saw_root = false;
        let mut depth = 0usize;
        let mut series: Vec<RawSeries> = Vec::new();
        let mut current: Option<RawSeries> = None;
        let mut in_pixels = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    Self::open_element(
                        &e, depth, true, &mut saw_root, &mut series, &mut current, &mut in_pixels,
                    )?;
                    depth += 1;
                }
                Event::Empty(e) => {
                    Self::open_element(
                        &e, depth, false, &mut saw_root, &mut series, &mut current, &mut in_pixels,
                    )?;
                }
                Event::End(e) => {
                    depth -= 1;
                    match e.local_name().as_ref() {
                        b"Image" if depth == 1 => {
                            if let Some(finished) = current.take() {
                                series.push(finished);
                            }
                        }
                        b"Pixels" if depth == 2 => in_pixels = false,
                        _ => {}
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !saw_root {
            return Err(OmeMetaError::MetadataUnavailable(
                "document has no OME root element".to_string(),
            ));
        }

        Ok(Self { series })
    }

    #[allow(clippy::too_many_arguments)]
    fn open_element(
        e: &BytesStart,
        depth: usize,
        has_children: bool,
        saw_root: &mut bool,
        series: &mut Vec<RawSeries>,
        current: &mut Option<RawSeries>,
        in_pixels: &mut bool,
    ) -> Result<()> {
        let name = e.local_name();
        match (depth, name.as_ref()) {
            (0, b"OME") => *saw_root = true,
            (0, other) => {
                return Err(OmeMetaError::MetadataUnavailable(format!(
                    "root element is '{}', expected 'OME'",
                    String::from_utf8_lossy(other)
                )));
            }
            (1, b"Image") if *saw_root => {
                let raw = RawSeries {
                    attrs: AttrBag::from_start(e)?,
                    pixels: None,
                };
                if has_children {
                    *current = Some(raw);
                } else {
                    // self-closing Image carries no Pixels
                    series.push(raw);
                }
            }
            (2, b"Pixels") => {
                if let Some(img) = current.as_mut() {
                    img.pixels = Some(RawPixels {
                        attrs: AttrBag::from_start(e)?,
                        ..Default::default()
                    });
                    *in_pixels = has_children;
                }
            }
            (3, b"Channel") if *in_pixels => {
                if let Some(pixels) = current.as_mut().and_then(|img| img.pixels.as_mut()) {
                    pixels.channels.push(AttrBag::from_start(e)?);
                }
            }
            (3, b"Plane") if *in_pixels => {
                if let Some(pixels) = current.as_mut().and_then(|img| img.pixels.as_mut()) {
                    pixels.planes.push(AttrBag::from_start(e)?);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Returns the raw series nodes in document order
    pub fn series(&self) -> &[RawSeries] {
        &self.series
    }

    /// Returns the number of series in the document
    pub fn series_count(&self) -> usize {
        self.series.len()
    }
}
