use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Universities,
    Clubs,
    People,
    Members,
}
