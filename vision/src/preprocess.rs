use anyhow::bail;
use opencv::{core::{Mat, MatTraitConst, Size, CV_8UC3}, imgproc::{cvt_color, gaussian_blur_def, COLOR_BGR2HSV}};


/// Blurs a BGR frame and converts it to HSV.
pub fn preprocess_image(img: &Mat, blur_kernel: i32) -> anyhow::Result<Mat> {
    if img.empty() {
        bail!("Empty frame");
    }
    if img.typ() != CV_8UC3 {
        bail!("Expected an 8-bit BGR frame, got type {}", img.typ());
    }

    let mut img_blur = Mat::default();
    gaussian_blur_def(img, &mut img_blur, Size::new(blur_kernel, blur_kernel), 0.0)?;

    let mut img_hsv = Mat::default();
    cvt_color(&img_blur, &mut img_hsv, COLOR_BGR2HSV, 0)?;

    Ok(img_hsv)
}
