/// Image loading for textimg: file or byte stream → luminance frame.

pub mod image;
