use crate::domain::categories::{Category, NewCategory};
use crate::domain::connections::{
    Connection, ConnectionRole, ConnectionStatus, ConnectionWithUser, NewConnection,
};
use crate::domain::sessions::SessionStore;
use crate::domain::skills::{NewSkill, Skill};
use crate::domain::storage::Storage;
use crate::domain::user_skills::{NewUserSkill, UserSkill, UserSkillUpdate, UserSkillWithSkill};
use crate::domain::users::{NewUser, User};
use crate::infrastructure::sessions::InMemorySessionStore;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use time::OffsetDateTime;

/// One counter per entity type, starting at 1.
struct Counters {
    users: i32,
    skills: i32,
    connections: i32,
    categories: i32,
}

struct Inner {
    users: BTreeMap<i32, User>,
    skills: BTreeMap<i32, Skill>,
    user_skills: BTreeMap<(i32, i32), UserSkill>,
    connections: BTreeMap<i32, Connection>,
    categories: BTreeMap<i32, Category>,
    next_id: Counters,
}

/// Reference in-memory implementation of the [`Storage`] contract.
///
/// BTreeMaps keyed by id, so iteration order is id order, which equals
/// insertion order. A single coarse mutex serializes every operation,
/// counter increments included. Seeded with the launch catalog of
/// categories and skills.
pub struct MemStorage {
    inner: Mutex<Inner>,
    sessions: Arc<dyn SessionStore>,
}

impl MemStorage {
    pub fn new() -> Self {
        let mut inner = Inner {
            users: BTreeMap::new(),
            skills: BTreeMap::new(),
            user_skills: BTreeMap::new(),
            connections: BTreeMap::new(),
            categories: BTreeMap::new(),
            next_id: Counters {
                users: 1,
                skills: 1,
                connections: 1,
                categories: 1,
            },
        };
        seed(&mut inner);

        Self {
            inner: Mutex::new(inner),
            sessions: Arc::new(InMemorySessionStore::new()),
        }
    }

}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_skill(inner: &mut Inner, new_skill: NewSkill) -> Skill {
    let id = inner.next_id.skills;
    inner.next_id.skills += 1;
    let skill = Skill {
        id,
        name: new_skill.name,
        category: new_skill.category,
        description: new_skill.description,
        icon_name: new_skill.icon_name,
    };
    inner.skills.insert(id, skill.clone());
    skill
}

fn insert_category(inner: &mut Inner, new: NewCategory) -> Category {
    let id = inner.next_id.categories;
    inner.next_id.categories += 1;
    let category = Category {
        id,
        name: new.name,
        description: new.description,
        icon_name: new.icon_name,
        image_url: new.image_url,
    };
    inner.categories.insert(id, category.clone());
    category
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: i32) -> Result<Option<User>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.values().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.values().any(|u| u.username == new_user.username) {
            anyhow::bail!("username '{}' is already taken", new_user.username);
        }

        let id = inner.next_id.users;
        inner.next_id.users += 1;
        let user = User {
            id,
            name: new_user.name,
            username: new_user.username,
            password: new_user.password,
            user_type: new_user.user_type,
        };
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    async fn get_skill(&self, id: i32) -> Result<Option<Skill>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.skills.get(&id).cloned())
    }

    async fn get_skills(&self) -> Result<Vec<Skill>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.skills.values().cloned().collect())
    }

    async fn get_skills_by_category(&self, category: &str) -> Result<Vec<Skill>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .skills
            .values()
            .filter(|s| s.category == category)
            .cloned()
            .collect())
    }

    async fn create_skill(&self, new_skill: NewSkill) -> Result<Skill> {
        let mut inner = self.inner.lock().unwrap();
        Ok(insert_skill(&mut inner, new_skill))
    }

    async fn get_user_skills(&self, user_id: i32) -> Result<Vec<UserSkillWithSkill>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .user_skills
            .values()
            .filter(|us| us.user_id == user_id)
            .filter_map(|us| {
                // Inner join: a row whose skill is gone is dropped.
                inner.skills.get(&us.skill_id).map(|skill| UserSkillWithSkill {
                    user_skill: us.clone(),
                    skill: skill.clone(),
                })
            })
            .collect())
    }

    async fn add_user_skill(&self, new: NewUserSkill) -> Result<UserSkill> {
        let mut inner = self.inner.lock().unwrap();
        let user_skill = UserSkill {
            user_id: new.user_id,
            skill_id: new.skill_id,
            is_teaching: new.is_teaching,
            is_learning: new.is_learning,
            level: new.level,
        };
        inner
            .user_skills
            .insert((new.user_id, new.skill_id), user_skill.clone());
        Ok(user_skill)
    }

    async fn update_user_skill(
        &self,
        user_id: i32,
        skill_id: i32,
        update: UserSkillUpdate,
    ) -> Result<Option<UserSkill>> {
        let mut inner = self.inner.lock().unwrap();
        let Some(row) = inner.user_skills.get_mut(&(user_id, skill_id)) else {
            return Ok(None);
        };

        if let Some(is_teaching) = update.is_teaching {
            row.is_teaching = is_teaching;
        }
        if let Some(is_learning) = update.is_learning {
            row.is_learning = is_learning;
        }
        if let Some(level) = update.level {
            row.level = level;
        }
        Ok(Some(row.clone()))
    }

    async fn remove_user_skill(&self, user_id: i32, skill_id: i32) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.user_skills.remove(&(user_id, skill_id));
        Ok(())
    }

    async fn get_connection(&self, id: i32) -> Result<Option<Connection>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.connections.get(&id).cloned())
    }

    async fn get_connections(
        &self,
        user_id: i32,
        role: ConnectionRole,
    ) -> Result<Vec<ConnectionWithUser>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .connections
            .values()
            .filter(|c| match role {
                ConnectionRole::Teacher => c.teacher_id == user_id,
                ConnectionRole::Student => c.student_id == user_id,
            })
            .filter_map(|c| {
                let counterpart_id = match role {
                    ConnectionRole::Teacher => c.student_id,
                    ConnectionRole::Student => c.teacher_id,
                };
                inner.users.get(&counterpart_id).map(|user| ConnectionWithUser {
                    connection: c.clone(),
                    user: user.clone(),
                })
            })
            .collect())
    }

    async fn create_connection(&self, new: NewConnection) -> Result<Connection> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id.connections;
        inner.next_id.connections += 1;
        let connection = Connection {
            id,
            teacher_id: new.teacher_id,
            student_id: new.student_id,
            status: ConnectionStatus::Pending,
            message: new.message,
            created_at: OffsetDateTime::now_utc(),
        };
        inner.connections.insert(id, connection.clone());
        Ok(connection)
    }

    async fn update_connection_status(
        &self,
        id: i32,
        status: ConnectionStatus,
    ) -> Result<Option<Connection>> {
        let mut inner = self.inner.lock().unwrap();
        let Some(connection) = inner.connections.get_mut(&id) else {
            return Ok(None);
        };
        connection.status = status;
        Ok(Some(connection.clone()))
    }

    async fn get_categories(&self) -> Result<Vec<Category>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.categories.values().cloned().collect())
    }

    async fn get_popular_categories(&self, limit: usize) -> Result<Vec<Category>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.categories.values().take(limit).cloned().collect())
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.categories.get(&id).cloned())
    }

    async fn create_category(&self, new: NewCategory) -> Result<Category> {
        let mut inner = self.inner.lock().unwrap();
        Ok(insert_category(&mut inner, new))
    }

    fn sessions(&self) -> Arc<dyn SessionStore> {
        Arc::clone(&self.sessions)
    }
}

/// Launch catalog: 8 categories and 7 skills.
fn seed(inner: &mut Inner) {
    let categories = [
        (
            "Programação",
            "Desenvolvimento de software e web",
            "code-line",
            "https://images.unsplash.com/photo-1517694712202-14dd9538aa97",
        ),
        (
            "Idiomas",
            "Aprendizado de idiomas estrangeiros",
            "translate",
            "https://images.unsplash.com/photo-1535016120720-40c646be5580",
        ),
        (
            "Música",
            "Instrumentos musicais e teoria",
            "music-2-line",
            "https://images.unsplash.com/photo-1557838923-2985c318be48",
        ),
        (
            "Culinária",
            "Técnicas de cozinha e receitas",
            "restaurant-line",
            "https://images.unsplash.com/photo-1601784551167-2c698216cad7",
        ),
        (
            "Esportes",
            "Diferentes modalidades esportivas",
            "basketball-line",
            "https://images.unsplash.com/photo-1552674605-db6ffd4facb5",
        ),
        (
            "Negócios",
            "Empreendedorismo e gestão",
            "briefcase-line",
            "https://images.unsplash.com/photo-1542744173-8e7e53415bb0",
        ),
        (
            "Matemática",
            "Cálculo, álgebra e estatística",
            "calculator-line",
            "https://images.unsplash.com/photo-1551269901-5c5e14c25df7",
        ),
        (
            "Design",
            "Design gráfico e UX/UI",
            "palette-line",
            "https://unsplash.com/photos/a-colorful-abstract-painting-with-a-teal-background-S_uHLJTnb5o",
        ),
    ];

    for (name, description, icon_name, image_url) in categories {
        insert_category(
            inner,
            NewCategory {
                name: name.to_string(),
                description: Some(description.to_string()),
                icon_name: Some(icon_name.to_string()),
                image_url: Some(image_url.to_string()),
            },
        );
    }

    let skills = [
        ("HTML/CSS", "Programação", "Fundamentos de web", "code-s-slash-line"),
        (
            "JavaScript",
            "Programação",
            "Linguagem de programação web",
            "javascript-line",
        ),
        ("React", "Programação", "Biblioteca para interfaces", "reactjs-line"),
        ("Inglês", "Idiomas", "Idioma global", "english-input"),
        ("Espanhol", "Idiomas", "Segunda língua mais falada", "spain-fill"),
        ("Piano", "Música", "Instrumento de teclas", "music-line"),
        ("Violão", "Música", "Instrumento de cordas", "guitar-line"),
    ];

    for (name, category, description, icon_name) in skills {
        insert_skill(
            inner,
            NewSkill {
                name: name.to_string(),
                category: category.to_string(),
                description: Some(description.to_string()),
                icon_name: Some(icon_name.to_string()),
            },
        );
    }
}
