use serde::{Deserialize, Serialize};

/// A `{name, url}` pointer as PokeAPI returns it for linked resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Detailed record returned by `GET /pokemon/{name}/`.
///
/// Only the fields the detail view needs are modelled; everything else in
/// the upstream payload is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub species: Option<NamedResource>,
}

impl Pokemon {
    /// Best image for the record: official artwork, falling back to the
    /// default front sprite.
    pub fn artwork_url(&self) -> Option<&str> {
        self.sprites
            .other
            .official_artwork
            .front_default
            .as_deref()
            .or(self.sprites.front_default.as_deref())
    }

    /// Type names ordered by slot.
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|slot| slot.slot);
        slots.into_iter().map(|slot| slot.kind.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
}

/// Lightweight pointer to a creature, as listed by a type lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryReference {
    pub name: String,
    pub url: String,
}

impl CategoryReference {
    /// Numeric id embedded in the resource URL
    /// (`.../pokemon/25/` yields `25`).
    pub fn id(&self) -> Option<u32> {
        let mut segments = self.url.rsplit('/');
        let last = segments.next()?;
        // URLs end with a slash, so the id is usually the second-to-last segment.
        let candidate = if last.is_empty() { segments.next()? } else { last };
        candidate.parse().ok()
    }
}

/// Body of `GET /type/{name}/`, reduced to the member list.
#[derive(Debug, Deserialize)]
pub(crate) struct TypeResponse {
    #[serde(default)]
    pokemon: Vec<TypeMember>,
}

#[derive(Debug, Deserialize)]
struct TypeMember {
    pokemon: NamedResource,
}

impl TypeResponse {
    pub(crate) fn into_references(self) -> Vec<CategoryReference> {
        self.pokemon
            .into_iter()
            .map(|member| CategoryReference {
                name: member.pokemon.name,
                url: member.pokemon.url,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(url: &str) -> CategoryReference {
        CategoryReference {
            name: "pikachu".into(),
            url: url.into(),
        }
    }

    #[test]
    fn id_is_parsed_from_trailing_slash_url() {
        assert_eq!(
            reference("https://pokeapi.co/api/v2/pokemon/25/").id(),
            Some(25)
        );
    }

    #[test]
    fn id_is_parsed_without_trailing_slash() {
        assert_eq!(
            reference("https://pokeapi.co/api/v2/pokemon/10034").id(),
            Some(10034)
        );
    }

    #[test]
    fn id_is_none_for_non_numeric_segment() {
        assert_eq!(reference("https://pokeapi.co/api/v2/pokemon/").id(), None);
        assert_eq!(reference("").id(), None);
    }

    #[test]
    fn type_response_flattens_in_order() {
        let body = r#"{
            "id": 10,
            "name": "fire",
            "pokemon": [
                {"pokemon": {"name": "charmander", "url": "https://pokeapi.co/api/v2/pokemon/4/"}, "slot": 1},
                {"pokemon": {"name": "vulpix", "url": "https://pokeapi.co/api/v2/pokemon/37/"}, "slot": 1}
            ]
        }"#;
        let response: TypeResponse = serde_json::from_str(body).unwrap();
        let refs = response.into_references();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].name, "charmander");
        assert_eq!(refs[1].id(), Some(37));
    }

    #[test]
    fn minimal_record_uses_defaults() {
        let body = r#"{"id": 1, "name": "bulbasaur", "height": 7, "weight": 69}"#;
        let pokemon: Pokemon = serde_json::from_str(body).unwrap();
        assert!(pokemon.abilities.is_empty());
        assert!(pokemon.artwork_url().is_none());
    }

    #[test]
    fn artwork_falls_back_to_front_sprite() {
        let body = r#"{
            "id": 25, "name": "pikachu", "height": 4, "weight": 60,
            "sprites": {"front_default": "front.png", "other": {"official-artwork": {"front_default": null}}}
        }"#;
        let pokemon: Pokemon = serde_json::from_str(body).unwrap();
        assert_eq!(pokemon.artwork_url(), Some("front.png"));
    }

    #[test]
    fn type_names_follow_slot_order() {
        let body = r#"{
            "id": 6, "name": "charizard", "height": 17, "weight": 905,
            "types": [
                {"slot": 2, "type": {"name": "flying", "url": ""}},
                {"slot": 1, "type": {"name": "fire", "url": ""}}
            ]
        }"#;
        let pokemon: Pokemon = serde_json::from_str(body).unwrap();
        assert_eq!(pokemon.type_names(), vec!["fire", "flying"]);
    }
}
