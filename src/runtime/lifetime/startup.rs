use crate::config::AppConfig;
use crate::models::{
    students::requests::CreateStudent,
    subjects::requests::SubjectForm,
    teachers::requests::CreateTeacher,
    users::{entities::UserRole, requests::CreateUser},
};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

const DEFAULT_ADMIN_EMAIL: &str = "admin@ssss.com";

const DEMO_CLASSES: [&str; 12] = [
    "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Matric", "Prep-1",
    "Prep-2",
];

const DEMO_SUBJECTS: [&str; 9] = [
    "Mathematics",
    "English",
    "Science",
    "Urdu",
    "Islamiat",
    "Computer",
    "Physics",
    "Chemistry",
    "Biology",
];

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 初始化默认管理员账号
/// 仅在用户表为空时执行，返回是否创建了账号
async fn seed_admin(storage: &Arc<dyn Storage>) -> bool {
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} user(s), skipping admin seed",
                count
            );
            return false;
        }
        Ok(_) => {
            info!("No users found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping admin seed", e);
            return false;
        }
    }

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return false;
        }
    };

    let admin = CreateUser {
        name: "Administrator".to_string(),
        email: DEFAULT_ADMIN_EMAIL.to_string(),
        password_hash,
        role: UserRole::Admin,
    };

    match storage.create_user(admin).await {
        Ok(user) => {
            info!(
                "Default admin account created successfully (ID: {}, email: {})",
                user.id, user.email
            );
            true
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
            false
        }
    }
}

/// 写入演示数据：班级、一年级科目、演示教师与学生
/// 单条失败只记录日志，不中断启动
async fn seed_demo_data(storage: &Arc<dyn Storage>) {
    let mut first_class_id = None;
    for class_name in DEMO_CLASSES {
        match storage.create_class(class_name).await {
            Ok(class) => {
                first_class_id.get_or_insert(class.id);
            }
            Err(e) => warn!("Failed to seed class {}: {}", class_name, e),
        }
    }

    for subject_name in DEMO_SUBJECTS {
        let subject = SubjectForm {
            subject_name: subject_name.to_string(),
            class_id: first_class_id,
        };
        if let Err(e) = storage.create_subject(subject).await {
            warn!("Failed to seed subject {}: {}", subject_name, e);
        }
    }

    match hash_password("teacher123") {
        Ok(password_hash) => {
            let teacher = CreateTeacher {
                name: "Ali Hassan".to_string(),
                email: "teacher@ssss.com".to_string(),
                password_hash,
                dob: Some("1985-06-15".to_string()),
                gender: Some("Male".to_string()),
                phone: Some("0300-1234567".to_string()),
                address: Some("Karachi".to_string()),
                cnic: Some("42101-1234567-1".to_string()),
            };
            if let Err(e) = storage.create_teacher(teacher).await {
                warn!("Failed to seed demo teacher: {}", e);
            }
        }
        Err(e) => warn!("Failed to hash demo teacher password: {}", e),
    }

    match hash_password("student123") {
        Ok(password_hash) => {
            let student = CreateStudent {
                name: "Ahmed Khan".to_string(),
                email: "student@ssss.com".to_string(),
                password_hash,
                dob: Some("2005-03-20".to_string()),
                gender: Some("Male".to_string()),
                address: Some("Karachi".to_string()),
                parent_name: Some("Khan Sr.".to_string()),
                parent_cnic: Some("42101-9876543-1".to_string()),
                phone: Some("0321-9876543".to_string()),
                class_id: first_class_id,
                roll_number: Some("1001".to_string()),
            };
            if let Err(e) = storage.create_student(student).await {
                warn!("Failed to seed demo student: {}", e);
            }
        }
        Err(e) => warn!("Failed to hash demo student password: {}", e),
    }

    warn!("Demo data seeded (teacher@ssss.com / teacher123, student@ssss.com / student123)");
}

/// 准备服务器启动的上下文
/// 包括存储初始化、迁移与初始数据
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 空库时初始化管理员，按需写入演示数据
    if seed_admin(&storage).await && AppConfig::get().app.seed_demo_data {
        seed_demo_data(&storage).await;
    }

    StartupContext { storage }
}
