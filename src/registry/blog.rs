//! Registries for the blog assignment's entities.

use crate::config::EntitiesConfig;
use crate::registry::{EntityKind, RoleRegistry};
use crate::schema::FieldKind;
use crate::signature::FieldSignature;

/// The post, comment and user registries, built once from configuration
#[derive(Debug, Clone)]
pub struct RegistrySet {
    post: RoleRegistry,
    comment: RoleRegistry,
    user: RoleRegistry,
}

impl RegistrySet {
    pub fn new(entities: &EntitiesConfig) -> Self {
        Self {
            post: post_registry(),
            comment: comment_registry(&entities.post_model, &entities.user_model),
            user: user_registry(),
        }
    }

    pub fn get(&self, entity: EntityKind) -> &RoleRegistry {
        match entity {
            EntityKind::Post => &self.post,
            EntityKind::Comment => &self.comment,
            EntityKind::User => &self.user,
        }
    }
}

impl Default for RegistrySet {
    fn default() -> Self {
        Self::new(&EntitiesConfig::default())
    }
}

/// Post fields are named by the assignment; only the image is free-named.
fn post_registry() -> RoleRegistry {
    RoleRegistry::builder(EntityKind::Post)
        .passthrough([
            "id",
            "created_at",
            "is_published",
            "title",
            "text",
            "pub_date",
            "author",
            "category",
            "location",
            "refresh_from_db",
        ])
        .role(
            "image",
            FieldSignature::plain(FieldKind::Image),
            "stores the publication's image",
        )
        .build()
}

fn comment_registry(post_model: &str, user_model: &str) -> RoleRegistry {
    RoleRegistry::builder(EntityKind::Comment)
        .passthrough(["id", "refresh_from_db"])
        .role(
            "post",
            FieldSignature::relation(FieldKind::ForeignKey, post_model),
            format!("links the comment model to model `{post_model}`"),
        )
        .role(
            "author",
            FieldSignature::relation(FieldKind::ForeignKey, user_model),
            format!("sets the comment's author, linking the comment model to model `{user_model}`"),
        )
        .role(
            "text",
            FieldSignature::plain(FieldKind::Text),
            "sets the comment text",
        )
        .role(
            "created_at",
            FieldSignature::plain(FieldKind::DateTime),
            "sets the comment date",
        )
        .build()
}

/// The user model comes from the framework, so every name is literal.
fn user_registry() -> RoleRegistry {
    RoleRegistry::builder(EntityKind::User)
        .passthrough([
            "id",
            "password",
            "last_login",
            "is_superuser",
            "username",
            "first_name",
            "last_name",
            "email",
            "is_staff",
            "is_active",
            "date_joined",
            "refresh_from_db",
        ])
        .build()
}
