//! Video result components - result cards and the add-to-course sub-form

use coursecast_core::{CourseContext, ThumbnailVariant};
use coursecast_search::VideoResult;

use super::layout::{button, escape_html, hidden_input};

/// Hidden field names the add-to-course endpoint reads.
pub mod fields {
    /// Provider video id
    pub const VIDEO_ID: &str = "yt_video_id";
    /// Video title
    pub const TITLE: &str = "title";
    /// Video description
    pub const DESCRIPTION: &str = "description";
    /// Provider channel id
    pub const CHANNEL_ID: &str = "yt_channel_id";
    /// Channel display name
    pub const CHANNEL_TITLE: &str = "yt_channel_title";
    /// Chosen thumbnail URL
    pub const THUMB_URL: &str = "thumb_url";
}

/// One hidden input of the add-to-course sub-form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenField {
    /// Input name
    pub name: &'static str,
    /// Unescaped input value
    pub value: String,
}

/// A rendered search hit: what the user sees plus the sub-form that
/// attaches the video to the current course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCard {
    /// Provider video id
    pub video_id: String,
    /// Displayed title
    pub title: String,
    /// Displayed description
    pub description: String,
    /// Displayed thumbnail
    pub thumbnail_url: String,
    /// Sub-form action path
    pub action: String,
    /// Hidden inputs in submission order
    pub hidden_fields: Vec<HiddenField>,
}

impl VideoCard {
    /// Builds the card for `video` in the context of `course`.
    ///
    /// Hidden fields copy the record verbatim; no trimming or validation.
    pub fn new(video: &VideoResult, course: CourseContext, thumbnail: ThumbnailVariant) -> Self {
        let thumbnail_url = video.thumbnail(thumbnail).to_string();

        let hidden_fields = vec![
            HiddenField {
                name: fields::VIDEO_ID,
                value: video.video_id.clone(),
            },
            HiddenField {
                name: fields::TITLE,
                value: video.title.clone(),
            },
            HiddenField {
                name: fields::DESCRIPTION,
                value: video.description.clone(),
            },
            HiddenField {
                name: fields::CHANNEL_ID,
                value: video.channel_id.clone(),
            },
            HiddenField {
                name: fields::CHANNEL_TITLE,
                value: video.channel_title.clone(),
            },
            HiddenField {
                name: fields::THUMB_URL,
                value: thumbnail_url.clone(),
            },
        ];

        Self {
            video_id: video.video_id.clone(),
            title: video.title.clone(),
            description: video.description.clone(),
            thumbnail_url,
            action: add_to_course_path(course, &video.video_id),
            hidden_fields,
        }
    }

    /// Value of the hidden field called `name`.
    pub fn hidden_value(&self, name: &str) -> Option<&str> {
        self.hidden_fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    /// Renders the card as an `<article>` element.
    pub fn to_html(&self) -> String {
        format!(
            r#"<article class="bg-gray-800 border border-gray-700 rounded-lg p-4 flex space-x-4" data-id="{video_id}">
            <img src="{thumbnail}" alt="thumbnail of video: {title}" class="w-48 rounded" />
            <div class="flex-1 min-w-0">
                <p class="text-white font-medium mb-1">Title: {title}</p>
                <p class="text-gray-400 text-sm mb-4">Description: {description}</p>
                {form}
            </div>
        </article>"#,
            video_id = escape_html(&self.video_id),
            thumbnail = escape_html(&self.thumbnail_url),
            title = escape_html(&self.title),
            description = escape_html(&self.description),
            form = add_to_course_form(self),
        )
    }
}

/// Path of the add-to-course endpoint for one video.
pub fn add_to_course_path(course: CourseContext, video_id: &str) -> String {
    format!(
        "/courses/{}/add-video/{}",
        course.course_id,
        urlencoding::encode(video_id)
    )
}

/// Renders the sub-form posting the card's hidden fields.
pub fn add_to_course_form(card: &VideoCard) -> String {
    let inputs: String = card
        .hidden_fields
        .iter()
        .map(|field| hidden_input(field.name, &field.value))
        .collect();

    format!(
        r#"<form method="POST" action="{}" class="add-to-course-form">
                    {inputs}
                    {}
                </form>"#,
        escape_html(&card.action),
        button("Add to course", "primary", Some(r#"type="submit""#))
    )
}

/// Renders cards in order, concatenated.
pub fn video_card_list(cards: &[VideoCard]) -> String {
    cards.iter().map(VideoCard::to_html).collect()
}

#[cfg(test)]
mod tests {
    use coursecast_search::providers::sample_video;

    use super::*;

    #[test]
    fn test_hidden_fields_mirror_record() {
        let video = sample_video(3);
        let card = VideoCard::new(&video, CourseContext::new(12), ThumbnailVariant::Medium);

        assert_eq!(card.hidden_fields.len(), 6);
        assert_eq!(card.hidden_value(fields::VIDEO_ID), Some("vid-3"));
        assert_eq!(card.hidden_value(fields::TITLE), Some(video.title.as_str()));
        assert_eq!(
            card.hidden_value(fields::DESCRIPTION),
            Some(video.description.as_str())
        );
        assert_eq!(card.hidden_value(fields::CHANNEL_ID), Some("UC-channel-3"));
        assert_eq!(card.hidden_value(fields::CHANNEL_TITLE), Some("Channel 3"));
        assert_eq!(
            card.hidden_value(fields::THUMB_URL),
            Some("https://img.test/3/medium.jpg")
        );
    }

    #[test]
    fn test_action_path_carries_course_and_video() {
        let video = sample_video(1);
        let card = VideoCard::new(&video, CourseContext::new(42), ThumbnailVariant::High);

        assert_eq!(card.action, "/courses/42/add-video/vid-1");
        assert_eq!(
            add_to_course_path(CourseContext::new(1), "a/b c"),
            "/courses/1/add-video/a%2Fb%20c"
        );
    }

    #[test]
    fn test_card_html_escapes_record_text() {
        let video = sample_video(7);
        let html = VideoCard::new(&video, CourseContext::new(5), ThumbnailVariant::High).to_html();

        assert!(html.contains(r#"data-id="vid-7""#));
        assert!(html.contains("Title: Video &lt;7&gt; &amp; &quot;friends&quot;"));
        assert!(html.contains(r#"action="/courses/5/add-video/vid-7""#));
        assert!(html.contains(
            r#"<input type="hidden" name="title" value="Video &lt;7&gt; &amp; &quot;friends&quot;" />"#
        ));
        assert_eq!(html.matches("<form").count(), 1);
        assert!(!html.contains("<7>"));
    }
}
