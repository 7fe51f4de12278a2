//! Hard-coded seed data
//!
//! The site starts from this snapshot on every launch; nothing is
//! persisted across runs.

use chrono::NaiveDate;

use crate::models::{
    Category, Education, Experience, LayoutTemplate, Profile, Project, Skill, Theme,
};
use super::Catalog;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Seed dates are compile-time constants.
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

pub fn catalog() -> Catalog {
    Catalog::with_data(projects(), categories())
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "E-commerce Platform".to_string(),
            description: "全端電商平台，包含購物車、支付系統、後台管理".to_string(),
            category: "Web Development".to_string(),
            category_id: 1,
            image: "https://images.unsplash.com/photo-1719400471588-575b23e27bd7?w=1080".to_string(),
            tags: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "MongoDB".to_string(),
                "Stripe".to_string(),
            ],
            likes: 45,
            views: 320,
            github_url: Some("https://github.com/example/ecommerce".to_string()),
            live_url: Some("https://example-ecommerce.com".to_string()),
            is_active: true,
            created_at: date(2024, 1, 15),
        },
        Project {
            id: 2,
            title: "Task Management App".to_string(),
            description: "團隊協作任務管理系統，支援即時通知和檔案分享".to_string(),
            category: "Mobile App".to_string(),
            category_id: 2,
            image: "https://images.unsplash.com/photo-1517309561013-16f6e4020305?w=1080".to_string(),
            tags: vec![
                "React Native".to_string(),
                "Firebase".to_string(),
                "Redux".to_string(),
            ],
            likes: 32,
            views: 256,
            github_url: Some("https://github.com/example/taskapp".to_string()),
            live_url: Some("https://example-taskapp.com".to_string()),
            is_active: true,
            created_at: date(2024, 2, 10),
        },
        Project {
            id: 3,
            title: "Data Analytics Dashboard".to_string(),
            description: "企業數據分析儀表板，包含圖表視覺化和報告生成".to_string(),
            category: "Data Science".to_string(),
            category_id: 3,
            image: "https://images.unsplash.com/photo-1621036579842-9080c7119f67?w=1080".to_string(),
            tags: vec![
                "Python".to_string(),
                "Django".to_string(),
                "D3.js".to_string(),
                "PostgreSQL".to_string(),
            ],
            likes: 28,
            views: 189,
            github_url: Some("https://github.com/example/analytics".to_string()),
            live_url: Some("https://example-analytics.com".to_string()),
            is_active: true,
            created_at: date(2024, 3, 5),
        },
    ]
}

pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: 1,
            name: "Web Development".to_string(),
            description: "網頁開發專案".to_string(),
        },
        Category {
            id: 2,
            name: "Mobile App".to_string(),
            description: "手機應用程式".to_string(),
        },
        Category {
            id: 3,
            name: "Data Science".to_string(),
            description: "數據科學專案".to_string(),
        },
        Category {
            id: 4,
            name: "DevOps".to_string(),
            description: "維運自動化".to_string(),
        },
    ]
}

pub fn profile() -> Profile {
    Profile {
        name: "Wei".to_string(),
        title: "Full Stack Developer".to_string(),
        bio: "具有5年以上全端開發經驗，專精於React、Node.js、Python等技術棧。\
              熱愛學習新技術，致力於創造優質的使用者體驗。"
            .to_string(),
        avatar: "https://images.unsplash.com/photo-1719400471588-575b23e27bd7?w=1080".to_string(),
        email: "developer@example.com".to_string(),
        github: "https://github.com/example".to_string(),
        linkedin: "https://linkedin.com/in/example".to_string(),
        website: "https://example.com".to_string(),
        skills: skills(),
        experience: experience(),
        education: vec![Education {
            degree: "資訊工程學士".to_string(),
            school: "國立大學".to_string(),
            period: "2014 - 2018".to_string(),
            description: "主修軟體工程、資料結構與演算法、資料庫系統".to_string(),
        }],
        certifications: vec![
            "AWS Certified Solutions Architect".to_string(),
            "Google Cloud Professional Developer".to_string(),
            "MongoDB Certified Developer".to_string(),
            "Certified Kubernetes Administrator".to_string(),
        ],
    }
}

fn skills() -> Vec<Skill> {
    let levels = [
        ("JavaScript/TypeScript", 95, "Frontend"),
        ("React/Next.js", 90, "Frontend"),
        ("Node.js/Express", 85, "Backend"),
        ("Python/Django", 80, "Backend"),
        ("Database (SQL/NoSQL)", 85, "Backend"),
        ("AWS/Azure", 75, "DevOps"),
        ("Docker/Kubernetes", 70, "DevOps"),
        ("Git/GitHub", 95, "Tools"),
    ];
    levels
        .iter()
        .map(|(name, level, category)| Skill {
            name: name.to_string(),
            level: *level,
            category: category.to_string(),
        })
        .collect()
}

fn experience() -> Vec<Experience> {
    vec![
        Experience {
            title: "Senior Full Stack Developer".to_string(),
            company: "科技公司 A".to_string(),
            period: "2022 - 現在".to_string(),
            location: "台北市".to_string(),
            description: vec![
                "負責前後端架構設計與開發".to_string(),
                "領導團隊開發大型電商平台".to_string(),
                "實施CI/CD流程，提升部署效率50%".to_string(),
                "指導初級開發者，提升團隊技術水平".to_string(),
            ],
            technologies: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "AWS".to_string(),
                "MongoDB".to_string(),
            ],
        },
        Experience {
            title: "Full Stack Developer".to_string(),
            company: "新創公司 B".to_string(),
            period: "2020 - 2022".to_string(),
            location: "台北市".to_string(),
            description: vec![
                "從零開始建構公司核心產品".to_string(),
                "開發響應式網頁應用程式".to_string(),
                "建立RESTful API與資料庫設計".to_string(),
                "負責產品的用戶體驗優化".to_string(),
            ],
            technologies: vec![
                "Vue.js".to_string(),
                "Python".to_string(),
                "PostgreSQL".to_string(),
                "Docker".to_string(),
            ],
        },
        Experience {
            title: "Junior Developer".to_string(),
            company: "軟體公司 C".to_string(),
            period: "2018 - 2020".to_string(),
            location: "新北市".to_string(),
            description: vec![
                "參與多個網頁開發專案".to_string(),
                "學習現代前端框架與工具".to_string(),
                "協助維護既有系統與功能開發".to_string(),
                "參與代碼審查與測試工作".to_string(),
            ],
            technologies: vec![
                "HTML/CSS".to_string(),
                "JavaScript".to_string(),
                "PHP".to_string(),
                "MySQL".to_string(),
            ],
        },
    ]
}

pub fn theme() -> Theme {
    Theme {
        primary_color: "#0B5FFF".to_string(),
        background_color: "#F7FAFF".to_string(),
        button_color: "#0B5FFF".to_string(),
        font: "Noto Sans TC, sans-serif".to_string(),
        layout_template: LayoutTemplate::Grid,
        language: "zh".to_string(),
    }
}
