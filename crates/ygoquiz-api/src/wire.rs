//! Response body of `cardinfo.php`.

use chrono::NaiveDate;
use serde::Deserialize;
use ygoquiz_engine::{Card, CardId, CardImage, CardSet, Rating};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Either `data` (on success) or `error` (on HTTP 400) is present.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    pub(crate) data: Option<Vec<WireCard>>,
    pub(crate) error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireCard {
    id: u64,
    name: String,
    #[serde(rename = "type", default)]
    card_type: String,
    attribute: Option<String>,
    level: Option<u32>,
    rank: Option<u32>,
    linkval: Option<u32>,
    atk: Option<i32>,
    def: Option<i32>,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    card_images: Vec<WireImage>,
    #[serde(default)]
    card_sets: Vec<WireSet>,
    #[serde(default)]
    misc_info: Vec<WireMisc>,
}

#[derive(Debug, Deserialize)]
struct WireImage {
    image_url: String,
    image_url_cropped: String,
}

#[derive(Debug, Deserialize)]
struct WireSet {
    set_name: String,
    set_code: Option<String>,
    set_rarity: Option<String>,
    set_release_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireMisc {
    tcg_date: Option<String>,
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .inspect_err(|e| log::debug!("ignoring release date {text:?}: {e}"))
        .ok()
}

impl WireCard {
    // Xyz monsters report their rank in `level`.
    fn rating(&self) -> Option<Rating> {
        if let Some(link) = self.linkval {
            return Some(Rating::Link(link));
        }
        if let Some(rank) = self.rank {
            return Some(Rating::Rank(rank));
        }
        let level = self.level?;
        if self.card_type.to_lowercase().contains("xyz") {
            Some(Rating::Rank(level))
        } else {
            Some(Rating::Level(level))
        }
    }

    fn tcg_date(&self) -> Option<NaiveDate> {
        self.misc_info
            .first()
            .and_then(|misc| misc.tcg_date.as_deref())
            .and_then(parse_date)
    }
}

impl From<WireCard> for Card {
    fn from(wire: WireCard) -> Self {
        let rating = wire.rating();
        let fallback_date = wire.tcg_date();
        let sets = wire
            .card_sets
            .into_iter()
            .map(|set| CardSet {
                name: set.set_name,
                code: set.set_code,
                rarity: set.set_rarity,
                release_date: set
                    .set_release_date
                    .as_deref()
                    .and_then(parse_date)
                    .or(fallback_date),
            })
            .collect();
        let images = wire
            .card_images
            .into_iter()
            .map(|image| CardImage {
                image_url: image.image_url,
                image_url_cropped: image.image_url_cropped,
            })
            .collect();

        Self {
            id: CardId::new(wire.id),
            name: wire.name,
            card_type: wire.card_type,
            attribute: wire.attribute,
            rating,
            atk: wire.atk,
            def: wire.def,
            description: wire.desc,
            images,
            sets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DARK_MAGICIAN: &str = r#"{
        "data": [{
            "id": 46986414,
            "name": "Dark Magician",
            "type": "Normal Monster",
            "frameType": "normal",
            "desc": "The ultimate wizard in terms of attack and defense.",
            "atk": 2500,
            "def": 2100,
            "level": 7,
            "race": "Spellcaster",
            "attribute": "DARK",
            "card_sets": [
                {"set_name": "Legend of Blue Eyes White Dragon", "set_code": "LOB-005", "set_rarity": "Ultra Rare", "set_price": "0"},
                {"set_name": "Dark Legends", "set_code": "DLG1-EN001", "set_rarity": "Common", "set_release_date": "2004-09-01"}
            ],
            "card_images": [{"id": 46986414, "image_url": "https://images.ygoprodeck.com/images/cards/46986414.jpg", "image_url_small": "s.jpg", "image_url_cropped": "https://images.ygoprodeck.com/images/cards_cropped/46986414.jpg"}],
            "misc_info": [{"views": 1, "tcg_date": "2002-03-08", "ocg_date": "1999-02-04"}]
        }]
    }"#;

    fn decode_single(json: &str) -> Card {
        let response: ApiResponse = serde_json::from_str(json).unwrap();
        let mut data = response.data.unwrap();
        assert_eq!(data.len(), 1);
        data.remove(0).into()
    }

    #[test]
    fn test_decode_monster() {
        let card = decode_single(DARK_MAGICIAN);
        assert_eq!(card.id, CardId::new(46_986_414));
        assert_eq!(card.name, "Dark Magician");
        assert_eq!(card.card_type, "Normal Monster");
        assert_eq!(card.attribute.as_deref(), Some("DARK"));
        assert_eq!(card.rating, Some(Rating::Level(7)));
        assert_eq!((card.atk, card.def), (Some(2500), Some(2100)));
        assert_eq!(
            card.cropped_image_url(),
            Some("https://images.ygoprodeck.com/images/cards_cropped/46986414.jpg")
        );
        assert_eq!(card.sets[0].code.as_deref(), Some("LOB-005"));
    }

    #[test]
    fn test_release_date_falls_back_to_tcg_date() {
        let card = decode_single(DARK_MAGICIAN);
        assert_eq!(card.sets[0].release_date, NaiveDate::from_ymd_opt(2002, 3, 8));
        assert_eq!(card.sets[1].release_date, NaiveDate::from_ymd_opt(2004, 9, 1));
        assert_eq!(card.release_date(), NaiveDate::from_ymd_opt(2002, 3, 8));
    }

    #[test]
    fn test_decode_spell_without_monster_fields() {
        let card = decode_single(
            r#"{"data": [{
                "id": 83764718,
                "name": "Monster Reborn",
                "type": "Spell Card",
                "desc": "Target 1 monster in either GY; Special Summon it.",
                "race": "Normal",
                "card_images": [{"image_url": "a.jpg", "image_url_cropped": "b.jpg"}]
            }]}"#,
        );
        assert_eq!(card.attribute, None);
        assert_eq!(card.rating, None);
        assert_eq!((card.atk, card.def), (None, None));
        assert!(card.sets.is_empty());
    }

    #[test]
    fn test_xyz_and_link_ratings() {
        let xyz = decode_single(
            r#"{"data": [{"id": 1, "name": "Number 39: Utopia", "type": "XYZ Monster", "level": 4, "atk": 2500, "def": 2000}]}"#,
        );
        assert_eq!(xyz.rating, Some(Rating::Rank(4)));

        let link = decode_single(
            r#"{"data": [{"id": 2, "name": "Decode Talker", "type": "Link Monster", "linkval": 3, "atk": 2300}]}"#,
        );
        assert_eq!(link.rating, Some(Rating::Link(3)));
        assert_eq!(link.def, None);
    }

    #[test]
    fn test_unparseable_date_is_dropped() {
        let card = decode_single(
            r#"{"data": [{"id": 3, "name": "X", "type": "Trap Card",
                "card_sets": [{"set_name": "S", "set_release_date": "unknown"}]}]}"#,
        );
        assert_eq!(card.release_date(), None);
    }

    #[test]
    fn test_decode_error_body() {
        let response: ApiResponse = serde_json::from_str(
            r#"{"error": "No card matching your query was found in the database."}"#,
        )
        .unwrap();
        assert!(response.data.is_none());
        assert!(response.error.unwrap().starts_with("No card matching"));
    }
}
