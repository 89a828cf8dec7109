use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::{form_urlencoded, Url};

use crate::{FilterSelection, FontColor, FontSize, SENTINEL_TAG};

const IMAGE_PATH: &str = "cat";
const SAYS_SEGMENT: &str = "says";

/// Characters escaped inside a single user-supplied path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Builds the image request URL for the current filter selection.
pub fn build_image_url(base: &Url, selection: &FilterSelection) -> String {
    image_url(
        base,
        selection.tag.as_deref(),
        &selection.overlay_text,
        selection.font_size,
        selection.font_color,
    )
}

/// Builds `<base>/cat[/<tag>][/says/<text>][?fontSize=..&fontColor=..]`.
///
/// Tag and text are percent-encoded as single path segments. Query
/// parameters are only attached when `text` is non-empty.
pub fn image_url(
    base: &Url,
    tag: Option<&str>,
    text: &str,
    size: Option<FontSize>,
    color: Option<FontColor>,
) -> String {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);

    // Cannot-be-a-base URLs are rejected when the base is configured.
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(IMAGE_PATH);
    }

    // `PathSegmentsMut::push` silently skips "." and "..", so user segments
    // are encoded and appended by hand.
    let mut out = String::from(url);
    if let Some(tag) = tag.filter(|tag| !tag.is_empty() && !is_sentinel(tag)) {
        push_segment(&mut out, tag);
    }
    if text.is_empty() {
        return out;
    }
    out.push('/');
    out.push_str(SAYS_SEGMENT);
    push_segment(&mut out, text);

    let params = [
        size.map(|size| ("fontSize", size.as_str())),
        color.map(|color| ("fontColor", color.as_str())),
    ];
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.extend_pairs(params.into_iter().flatten());
    let query = query.finish();
    if !query.is_empty() {
        out.push('?');
        out.push_str(&query);
    }
    out
}

/// The sentinel matches regardless of case, like the tag filter does.
fn is_sentinel(tag: &str) -> bool {
    tag.eq_ignore_ascii_case(SENTINEL_TAG)
}

fn push_segment(out: &mut String, raw: &str) {
    out.push('/');
    out.push_str(&encode_segment(raw));
}

fn encode_segment(raw: &str) -> Cow<'_, str> {
    if raw.chars().all(|ch| ch == '.') {
        return Cow::Owned(raw.replace('.', "%2E"));
    }
    utf8_percent_encode(raw, SEGMENT).into()
}
