//! End-to-end: parts drawn with the real `UrlLoader` and decoded `ImageData`

use std::io::Cursor;

use base64::Engine as _;
use easel_image::{ImageData, UrlLoader};
use easel_paint::{PaintCommand, PaintContext};
use easel_parts::{draw_parts, ImageElmPart, ImagePart, Part, PartRenderer, RenderConfig, TextPart};

type Ctx = PaintContext<ImageData>;

fn png_data_uri(width: u32, height: u32) -> String {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([9, 8, 7, 255]));
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes.into_inner())
    )
}

#[test]
fn test_mixed_parts_with_url_loader() {
    let loader = UrlLoader::new().unwrap();
    let decoded = ImageData::from_rgba(vec![0u8; 4], 1, 1);
    let mut ctx = Ctx::new();

    let parts: Vec<Part<'_, Ctx>> = vec![
        TextPart::new("caption", 0.0, 0.0).into(),
        ImagePart::<Ctx>::new(png_data_uri(3, 3), 0.0, 0.0, 30.0, 30.0)
            .clip_circle()
            .into(),
        ImagePart::new("/no/such/file.png", 0.0, 0.0, 30.0, 30.0).into(),
        ImageElmPart::new(&decoded, 40.0, 0.0, 10.0, 10.0).into(),
    ];
    pollster::block_on(draw_parts(&mut ctx, &parts, &loader)).unwrap();

    let mut sizes: Vec<(u32, bool)> = ctx
        .images()
        .into_iter()
        .map(|image| (image.width(), image.is_anonymous()))
        .collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![(1, false), (3, true)]);
    assert_eq!(ctx.texts(), vec!["caption"]);
    assert_eq!(ctx.depth(), 0);
}

#[test]
fn test_credentialed_mode_from_config() {
    let config = RenderConfig::from_toml_str("anonymous_images = false").unwrap();
    let renderer = PartRenderer::with_config(UrlLoader::new().unwrap(), config);
    let mut ctx = Ctx::new();

    let parts: Vec<Part<'_, Ctx>> = vec![ImagePart::new(png_data_uri(2, 1), 5.0, 6.0, 20.0, 10.0).into()];
    pollster::block_on(renderer.draw_parts(&mut ctx, &parts)).unwrap();

    match ctx.commands() {
        [PaintCommand::Save, PaintCommand::DrawImage { image, rect, .. }, PaintCommand::Restore] => {
            assert!(!image.is_anonymous());
            assert_eq!((image.width(), image.height()), (2, 1));
            assert_eq!((rect.x, rect.y, rect.width, rect.height), (5.0, 6.0, 20.0, 10.0));
        }
        other => panic!("unexpected commands {other:?}"),
    }
}
