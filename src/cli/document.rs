use std::fmt::Display;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde_json::Value;
use simplelog::{debug, info};

use crate::codec::{Decode, Encode};
use crate::config::Config;
use crate::error::Entity;
use crate::models::*;

#[derive(Args, Debug, PartialEq)]
pub struct DocumentArgs {
    /// Which entity the document holds
    #[arg(value_enum)]
    pub kind: Kind,
    /// Path to the JSON document. Reads from stdin when omitted
    pub file: Option<PathBuf>,
}

/// The entities a document on the command line can hold
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum Kind {
    Home,
    User,
    Profile,
    Collection,
    Content,
    Media,
    Cast,
    Director,
    Writer,
}

impl Kind {
    pub fn entity(&self) -> Entity {
        match self {
            Kind::Home => Entity::HomeContentAPIModel,
            Kind::User => Entity::UserAPIModel,
            Kind::Profile => Entity::UserProfileData,
            Kind::Collection => Entity::CollectionItemData,
            Kind::Content => Entity::PlayableContentData,
            Kind::Media => Entity::PlayableContentMedia,
            Kind::Cast => Entity::Cast,
            Kind::Director => Entity::Director,
            Kind::Writer => Entity::Writer,
        }
    }
}

/// A successfully decoded document
#[derive(Debug, PartialEq)]
pub struct Decoded {
    pub entity: Entity,
    pub summary: String,
    pub normalized: Value,
}

pub fn decode_document(kind: Kind, json: &str) -> Result<Decoded> {
    match kind {
        Kind::Home => decode_as::<HomeContentAPIModel>(json),
        Kind::User => decode_as::<UserAPIModel>(json),
        Kind::Profile => decode_as::<UserProfileData>(json),
        Kind::Collection => decode_as::<CollectionItemData>(json),
        Kind::Content => decode_as::<PlayableContentData>(json),
        Kind::Media => decode_as::<PlayableContentMedia>(json),
        Kind::Cast => decode_as::<Cast>(json),
        Kind::Director => decode_as::<Director>(json),
        Kind::Writer => decode_as::<Writer>(json),
    }
}

fn decode_as<T>(json: &str) -> Result<Decoded>
where
    T: Decode + Encode + Display,
{
    let decoded = T::from_json(json)?;

    Ok(Decoded {
        entity: T::ENTITY,
        summary: decoded.to_string(),
        normalized: decoded.encode()?,
    })
}

fn read_document(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => {
            debug!("Reading document from `{}`", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Unable to read document `{}`", path.display()))
        }
        None => {
            debug!("Reading document from stdin");
            let mut json = String::default();
            std::io::stdin()
                .read_to_string(&mut json)
                .context("Unable to read document from stdin")?;
            Ok(json)
        }
    }
}

pub fn execute_check_cmd(args: DocumentArgs) -> Result<()> {
    let json = read_document(args.file.as_ref())?;
    let decoded = decode_document(args.kind, &json)
        .with_context(|| format!("Document is not a valid {}", args.kind.entity()))?;

    info!("Valid {}", decoded.entity);
    for line in decoded.summary.lines() {
        info!("{line}");
    }

    Ok(())
}

pub fn execute_normalize_cmd(args: DocumentArgs, config: &Config) -> Result<()> {
    let json = read_document(args.file.as_ref())?;
    let decoded = decode_document(args.kind, &json)
        .with_context(|| format!("Document is not a valid {}", args.kind.entity()))?;

    let output = if config.get_compact() {
        serde_json::to_string(&decoded.normalized)?
    } else {
        serde_json::to_string_pretty(&decoded.normalized)?
    };
    println!("{output}");

    Ok(())
}
