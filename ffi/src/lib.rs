// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! C ABI over pixel_raster.
//!
//! Image handles come from `rs_IndexedImage_new` and must be released exactly once with
//! `rs_IndexedImage_free`. Every other call takes a handle that is still live; a null
//! handle is ignored (draw calls) or reported as failure. Strings are NUL terminated.

// Exported names follow rs_Type_method, stop warning about their case!
#![allow(non_snake_case)]
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use pixel_raster::render::{text, IndexedImage};
use std::ffi::{c_char, c_int, CStr};

fn image_mut<'a>(p_img: *mut IndexedImage) -> Option<&'a mut IndexedImage> {
    unsafe { p_img.as_mut() }
}

fn image_ref<'a>(p_img: *const IndexedImage) -> Option<&'a IndexedImage> {
    unsafe { p_img.as_ref() }
}

fn c_chars<'a>(p_text: *const c_char) -> Option<impl Iterator<Item = char> + 'a> {
    if p_text.is_null() {
        return None;
    }
    let bytes = unsafe { CStr::from_ptr(p_text) }.to_bytes();
    Some(bytes.iter().map(|&b| b as char))
}

/// Returns null on zero or oversized dimensions, or when allocation fails.
#[no_mangle]
pub extern "C" fn rs_IndexedImage_new(width: usize, height: usize) -> *mut IndexedImage {
    match IndexedImage::new(width, height) {
        Ok(img) => Box::into_raw(Box::new(img)),
        Err(e) => {
            log::warn!("rs_IndexedImage_new: {}", e);
            std::ptr::null_mut()
        }
    }
}

#[no_mangle]
pub extern "C" fn rs_IndexedImage_free(p_img: *mut IndexedImage) {
    if !p_img.is_null() {
        unsafe {
            let _ = Box::from_raw(p_img);
        };
    }
}

/// Writes the new index to `p_idx` (if not null) and returns true; returns false and
/// leaves `p_idx` alone when the palette is full.
#[no_mangle]
pub extern "C" fn rs_IndexedImage_palette_add(
    p_img: *mut IndexedImage,
    r: u8,
    g: u8,
    b: u8,
    p_idx: *mut u8,
) -> bool {
    let Some(img) = image_mut(p_img) else {
        return false;
    };
    store_index(img.palette_add(r, g, b).ok(), p_idx)
}

#[no_mangle]
pub extern "C" fn rs_IndexedImage_palette_add_blend(
    p_img: *mut IndexedImage,
    idx0: u8,
    idx1: u8,
    pos: u8,
    p_idx: *mut u8,
) -> bool {
    let Some(img) = image_mut(p_img) else {
        return false;
    };
    store_index(img.palette_add_blend(idx0, idx1, pos).ok(), p_idx)
}

fn store_index(idx: Option<u8>, p_idx: *mut u8) -> bool {
    match idx {
        Some(idx) => {
            if !p_idx.is_null() {
                unsafe { *p_idx = idx };
            }
            true
        }
        None => false,
    }
}

#[no_mangle]
pub extern "C" fn rs_IndexedImage_clear(p_img: *mut IndexedImage, colour: u8) {
    if let Some(img) = image_mut(p_img) {
        img.clear(colour);
    }
}

#[no_mangle]
pub extern "C" fn rs_IndexedImage_pixel(p_img: *mut IndexedImage, colour: u8, x: c_int, y: c_int) {
    if let Some(img) = image_mut(p_img) {
        img.draw_pixel(colour, x, y);
    }
}

#[no_mangle]
pub extern "C" fn rs_IndexedImage_v_line(
    p_img: *mut IndexedImage,
    colour: u8,
    y0: c_int,
    y1: c_int,
    x: c_int,
) {
    if let Some(img) = image_mut(p_img) {
        img.draw_v_line(colour, y0, y1, x);
    }
}

#[no_mangle]
pub extern "C" fn rs_IndexedImage_h_line(
    p_img: *mut IndexedImage,
    colour: u8,
    x0: c_int,
    x1: c_int,
    y: c_int,
) {
    if let Some(img) = image_mut(p_img) {
        img.draw_h_line(colour, x0, x1, y);
    }
}

#[no_mangle]
pub extern "C" fn rs_IndexedImage_line(
    p_img: *mut IndexedImage,
    colour: u8,
    x0: c_int,
    y0: c_int,
    x1: c_int,
    y1: c_int,
) {
    if let Some(img) = image_mut(p_img) {
        img.draw_line(colour, x0, y0, x1, y1);
    }
}

#[no_mangle]
pub extern "C" fn rs_IndexedImage_rect_fill(
    p_img: *mut IndexedImage,
    colour: u8,
    x: c_int,
    y: c_int,
    w: c_int,
    h: c_int,
) {
    if let Some(img) = image_mut(p_img) {
        img.fill_rect(colour, x, y, w, h);
    }
}

#[no_mangle]
pub extern "C" fn rs_IndexedImage_char_scaled(
    p_img: *mut IndexedImage,
    colour: u8,
    character: c_char,
    scale_x: c_int,
    scale_y: c_int,
    x: c_int,
    y: c_int,
) -> c_int {
    match image_mut(p_img) {
        Some(img) => img.draw_char_scaled(colour, character as u8 as char, scale_x, scale_y, x, y),
        None => 0,
    }
}

#[no_mangle]
pub extern "C" fn rs_IndexedImage_char(
    p_img: *mut IndexedImage,
    colour: u8,
    character: c_char,
    scale: c_int,
    x: c_int,
    y: c_int,
) -> c_int {
    rs_IndexedImage_char_scaled(p_img, colour, character, scale, scale, x, y)
}

#[no_mangle]
pub extern "C" fn rs_IndexedImage_text(
    p_img: *mut IndexedImage,
    colour: u8,
    p_text: *const c_char,
    scale: c_int,
    x: c_int,
    y: c_int,
) -> c_int {
    match (image_mut(p_img), c_chars(p_text)) {
        (Some(img), Some(chars)) => img.draw_chars(colour, chars, scale, x, y),
        _ => 0,
    }
}

#[no_mangle]
pub extern "C" fn rs_text_width(p_text: *const c_char, scale: c_int) -> c_int {
    c_chars(p_text)
        .map(|chars| text::chars_width(chars, scale))
        .unwrap_or(0)
}

#[no_mangle]
pub extern "C" fn rs_text_height(scale: c_int) -> c_int {
    text::text_height(scale)
}

#[no_mangle]
pub extern "C" fn rs_IndexedImage_width(p_img: *const IndexedImage) -> c_int {
    image_ref(p_img).map(|img| img.width()).unwrap_or(0)
}

#[no_mangle]
pub extern "C" fn rs_IndexedImage_height(p_img: *const IndexedImage) -> c_int {
    image_ref(p_img).map(|img| img.height()).unwrap_or(0)
}

/// Pixel buffer, `*p_len` receives width * height. Valid until the next draw or free.
#[no_mangle]
pub extern "C" fn rs_IndexedImage_data(p_img: *const IndexedImage, p_len: *mut usize) -> *const u8 {
    let Some(img) = image_ref(p_img) else {
        return std::ptr::null();
    };
    if !p_len.is_null() {
        unsafe { *p_len = img.size() };
    }
    img.pixels().as_ptr()
}

/// Palette as packed rgb triples, `*p_count` receives the number of entries.
#[no_mangle]
pub extern "C" fn rs_IndexedImage_palette(
    p_img: *const IndexedImage,
    p_count: *mut usize,
) -> *const u8 {
    let Some(img) = image_ref(p_img) else {
        return std::ptr::null();
    };
    if !p_count.is_null() {
        unsafe { *p_count = img.palette().len() };
    }
    img.palette().as_bytes().as_ptr()
}
