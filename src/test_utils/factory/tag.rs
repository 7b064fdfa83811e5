use entities::tag;
use sea_orm::Set;

pub fn tag(name: &str) -> tag::ActiveModel {
    tag::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
}

pub trait TagFactory {
    fn description(self, description: Option<String>) -> tag::ActiveModel;
}

impl TagFactory for tag::ActiveModel {
    fn description(mut self, description: Option<String>) -> tag::ActiveModel {
        self.description = Set(description);
        self
    }
}
