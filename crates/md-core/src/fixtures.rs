//! Writers for small DICOM and TIFF files used by tests.
//!
//! Compiled for this crate's tests and, through the `fixtures` feature, for
//! the CLI tests. Every writer panics on failure.

use std::fs::File;
use std::path::{Path, PathBuf};

use dicom_core::{DataElement, PrimitiveValue, VR};
use dicom_dictionary_std::{tags, uids};
use dicom_object::{FileMetaTableBuilder, InMemDicomObject};
use tiff::encoder::{TiffEncoder, colortype};
use tiff::tags::Tag;

/// Writes a header-only DICOM file.
///
/// `acquisition` is the raw `(AcquisitionDate, AcquisitionTime)` pair; pass
/// `None` for a file without acquisition attributes.
pub fn write_dicom(
    dir: &Path,
    name: &str,
    acquisition: Option<(&str, &str)>,
    comment: Option<&str>,
) -> PathBuf {
    let (date, time) = acquisition.unzip();
    write_dicom_fields(dir, name, date, time, comment)
}

/// Writes a header-only DICOM file with each acquisition attribute set or
/// left out independently. An empty string writes a zero-length element.
pub fn write_dicom_fields(
    dir: &Path,
    name: &str,
    date: Option<&str>,
    time: Option<&str>,
    comment: Option<&str>,
) -> PathBuf {
    let path = dir.join(name);
    let instance_uid = format!("2.25.{}", name.bytes().map(u64::from).sum::<u64>());

    let mut obj = InMemDicomObject::new_empty();
    obj.put(DataElement::new(
        tags::SOP_CLASS_UID,
        VR::UI,
        PrimitiveValue::from(uids::SECONDARY_CAPTURE_IMAGE_STORAGE),
    ));
    obj.put(DataElement::new(
        tags::SOP_INSTANCE_UID,
        VR::UI,
        PrimitiveValue::from(instance_uid.as_str()),
    ));
    if let Some(date) = date {
        obj.put(DataElement::new(
            tags::ACQUISITION_DATE,
            VR::DA,
            PrimitiveValue::from(date),
        ));
    }
    if let Some(time) = time {
        obj.put(DataElement::new(
            tags::ACQUISITION_TIME,
            VR::TM,
            PrimitiveValue::from(time),
        ));
    }
    if let Some(comment) = comment {
        obj.put(DataElement::new(
            tags::IMAGE_COMMENTS,
            VR::LT,
            PrimitiveValue::from(comment),
        ));
    }

    let file = obj
        .with_meta(
            FileMetaTableBuilder::new()
                .media_storage_sop_class_uid(uids::SECONDARY_CAPTURE_IMAGE_STORAGE)
                .media_storage_sop_instance_uid(instance_uid.as_str())
                .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN),
        )
        .expect("valid file meta table");
    file.write_to_file(&path).expect("write DICOM fixture");
    path
}

/// Writes a 2x2 grayscale TIFF, optionally with a `DateTime` tag.
pub fn write_tiff(dir: &Path, name: &str, datetime: Option<&str>) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("create TIFF fixture");
    let mut encoder = TiffEncoder::new(file).expect("TIFF encoder");

    let mut image = encoder
        .new_image::<colortype::Gray8>(2, 2)
        .expect("TIFF image");
    if let Some(datetime) = datetime {
        image
            .encoder()
            .write_tag(Tag::DateTime, datetime)
            .expect("write DateTime tag");
    }
    image.write_data(&[0, 64, 128, 255]).expect("write TIFF data");
    path
}

/// Writes an arbitrary text file.
pub fn write_text(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write text fixture");
    path
}
