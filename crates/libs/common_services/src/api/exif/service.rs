use crate::api::exif::interfaces::ExifResponseDto;
use common_types::Exif;

#[must_use]
pub fn map_exif(exif: &Exif) -> ExifResponseDto {
    ExifResponseDto {
        make: exif.make.clone(),
        model: exif.model.clone(),
        exif_image_width: exif.exif_image_width,
        exif_image_height: exif.exif_image_height,
        file_size_in_byte: exif.file_size_in_byte,
        orientation: exif.orientation.clone(),
        date_time_original: exif.date_time_original,
        modify_date: exif.modify_date,
        time_zone: exif.time_zone.clone(),
        lens_model: exif.lens_model.clone(),
        f_number: exif.f_number,
        focal_length: exif.focal_length,
        iso: exif.iso,
        exposure_time: exif.exposure_time.clone(),
        latitude: exif.latitude,
        longitude: exif.longitude,
        city: exif.city.clone(),
        state: exif.state.clone(),
        country: exif.country.clone(),
        description: exif.description.clone(),
        projection_type: exif.projection_type.clone(),
        rating: exif.rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_missing_values_as_null() -> color_eyre::Result<()> {
        let exif = Exif {
            asset_id: "asset-1".into(),
            make: Some("Canon".into()),
            f_number: Some(2.8),
            iso: Some(400),
            ..Exif::default()
        };

        let value = serde_json::to_value(map_exif(&exif))?;
        assert_eq!(value["make"], json!("Canon"));
        assert_eq!(value["fNumber"], json!(2.8));
        assert_eq!(value["iso"], json!(400));
        assert_eq!(value["lensModel"], json!(null));
        assert_eq!(value["fileSizeInByte"], json!(null));
        assert!(value.get("assetId").is_none());
        Ok(())
    }
}
