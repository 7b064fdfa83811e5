use entities::grant;
use sea_orm::Set;

pub fn grant() -> grant::ActiveModel {
    grant::ActiveModel {
        name: Set("grant".to_string()),
        description: Set("grant description".to_string()),
        ..Default::default()
    }
}

pub trait GrantFactory {
    fn name(self, name: &str) -> grant::ActiveModel;
    fn description(self, description: &str) -> grant::ActiveModel;
}

impl GrantFactory for grant::ActiveModel {
    fn name(mut self, name: &str) -> grant::ActiveModel {
        self.name = Set(name.to_string());
        self
    }

    fn description(mut self, description: &str) -> grant::ActiveModel {
        self.description = Set(description.to_string());
        self
    }
}
