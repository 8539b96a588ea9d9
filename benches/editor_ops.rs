use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use vkeyboard::core::state::{
    editor::{buffer::EditorBuffer, EditorState},
    text_box::{TextBox, TextSurface},
};
use vkeyboard::domain::{KeyOptions, Language};

const TEXT: &str = "Lietuvių kalba yra viena iš dviejų gyvų baltų kalbų. Ąžuolas, čiuožykla, ėriukas, įlanka, šuo, ūkis, žąsis. ";

fn typing(c: &mut Criterion) {
    c.bench_function("buffer-insert-end", |b| {
        b.iter(|| {
            let mut buffer = EditorBuffer::new("");
            for ch in black_box(TEXT).chars() {
                buffer.insert(ch.encode_utf8(&mut [0; 4]));
            }
            buffer
        })
    });

    c.bench_function("buffer-insert-middle", |b| {
        b.iter(|| {
            let mut buffer = EditorBuffer::new(TEXT.repeat(8));
            buffer.set_caret(buffer.len() / 2);
            for ch in black_box(TEXT).chars() {
                buffer.insert(ch.encode_utf8(&mut [0; 4]));
            }
            buffer
        })
    });

    c.bench_function("editor-type-and-erase", |b| {
        b.iter(|| {
            let mut text_box = TextBox::new("");
            let mut editor = EditorState::new(Language::Lt, KeyOptions::default());
            editor.open("", Box::new(|text: &str| {
                black_box(text);
            }));
            for ch in black_box(TEXT).chars() {
                editor.insert_at(&mut text_box, ch.encode_utf8(&mut [0; 4]));
            }
            while !text_box.value().is_empty() {
                editor.backspace(&mut text_box);
            }
            text_box
        })
    });
}

criterion_group!(benches, typing);
criterion_main!(benches);
