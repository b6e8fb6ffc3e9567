//! Canned wire payloads shared by the integration test binaries
//!
//! Everything here is snake_case, exactly as the server would send it.

#![allow(dead_code)]

use serde_json::{json, Value};

pub fn sample_image(id: u64) -> Value {
    json!({
        "animated": false,
        "aspect_ratio": 1.5,
        "comment_count": 3,
        "created_at": "2024-01-02T03:04:05Z",
        "deletion_reason": null,
        "description": "an image",
        "downvotes": 1,
        "duplicate_of": null,
        "duration": 0.04,
        "faves": 20,
        "first_seen_at": "2024-01-02T03:04:05Z",
        "format": "png",
        "height": 1000,
        "hidden_from_users": false,
        "id": id,
        "intensities": { "nw": 41.0, "ne": 42.0, "sw": 43.0, "se": 44.0 },
        "mime_type": "image/png",
        "name": format!("image_{id}.png"),
        "orig_sha512_hash": null,
        "processed": true,
        "representations": {
            "full": format!("https://example.com/{id}/full.png"),
            "large": format!("https://example.com/{id}/large.png"),
            "medium": format!("https://example.com/{id}/medium.png"),
            "small": format!("https://example.com/{id}/small.png"),
            "tall": format!("https://example.com/{id}/tall.png"),
            "thumb": format!("https://example.com/{id}/thumb.png"),
            "thumb_small": format!("https://example.com/{id}/thumb_small.png"),
            "thumb_tiny": format!("https://example.com/{id}/thumb_tiny.png")
        },
        "score": 19,
        "sha512_hash": "0123456789abcdef",
        "size": 123_456,
        "source_urls": ["https://example.com/source"],
        "spoilered": false,
        "tag_count": 2,
        "tag_ids": [10, 11],
        "tags": ["safe", "cute"],
        "thumbnails_generated": true,
        "updated_at": "2024-01-02T03:04:05Z",
        "uploader": "somepony",
        "uploader_id": 9,
        "upvotes": 20,
        "view_url": format!("https://example.com/view/{id}.png"),
        "width": 1500,
        "wilson_score": 0.93
    })
}

pub fn sample_comment(id: u64, image_id: u64) -> Value {
    json!({
        "author": "somepony",
        "avatar": "https://example.com/avatar.png",
        "body": "nice",
        "created_at": "2024-01-02T03:04:05Z",
        "edit_reason": null,
        "edited_at": null,
        "id": id,
        "image_id": image_id,
        "updated_at": "2024-01-02T03:04:05Z",
        "user_id": 9
    })
}

pub fn sample_tag(id: u64) -> Value {
    json!({
        "aliased_tag": null,
        "aliases": [],
        "category": null,
        "description": "a tag",
        "dnp_entries": [],
        "id": id,
        "images": 5000,
        "implied_by_tags": [],
        "implied_tags": [],
        "name": "cute",
        "name_in_namespace": "cute",
        "namespace": null,
        "short_description": null,
        "slug": "cute",
        "spoiler_image_uri": null
    })
}

pub fn sample_forum() -> Value {
    json!({
        "name": "Site and Policy",
        "short_name": "dis",
        "description": "site discussion",
        "topic_count": 10,
        "post_count": 200
    })
}

pub fn sample_topic(slug: &str) -> Value {
    json!({
        "slug": slug,
        "title": "a topic",
        "post_count": 4,
        "view_count": 100,
        "sticky": false,
        "last_replied_to_at": "2024-01-02T03:04:05Z",
        "locked": false,
        "user_id": 9,
        "author": "somepony"
    })
}

pub fn sample_post(id: u64) -> Value {
    json!({
        "author": "somepony",
        "avatar": "https://example.com/avatar.png",
        "body": "a post",
        "created_at": "2024-01-02T03:04:05Z",
        "edit_reason": null,
        "edited_at": null,
        "id": id,
        "updated_at": "2024-01-02T03:04:05Z",
        "user_id": 9
    })
}

pub fn sample_gallery(id: u64) -> Value {
    json!({
        "description": "a gallery",
        "id": id,
        "spoiler_warning": "",
        "thumbnail_id": 1,
        "title": "favorites",
        "user": "somepony",
        "user_id": 9
    })
}

pub fn sample_user(id: u64) -> Value {
    json!({
        "id": id,
        "name": "somepony",
        "slug": "somepony",
        "role": "user",
        "description": "a user",
        "avatar_url": null,
        "created_at": "2024-01-02T03:04:05Z",
        "comments_count": 3,
        "uploads_count": 1,
        "posts_count": 7,
        "topics_count": 2,
        "links": [],
        "awards": [{
            "image_url": "https://example.com/award.png",
            "title": "an award",
            "id": 1,
            "label": "shiny",
            "awarded_on": "2024-01-02T03:04:05Z"
        }]
    })
}

pub fn sample_filter() -> Value {
    json!({
        "id": 1,
        "name": "Default",
        "description": "the default filter",
        "user_id": null,
        "user_count": 100_000,
        "system": true,
        "public": true,
        "spoilered_tag_ids": [10],
        "spoilered_complex": "",
        "hidden_tag_ids": [11],
        "hidden_complex": ""
    })
}
