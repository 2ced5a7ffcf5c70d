use serde::{Deserialize, Serialize};

/// 文档章节的键
///
/// 已知章节使用固定的字符串标识，自定义章节的键由显示名称派生。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum SectionKey {
    Title,
    Badges,
    Features,
    TechStack,
    Installation,
    Usage,
    ProjectStructure,
    ApiReference,
    Deployment,
    EnvironmentVariables,
    Screenshots,
    Testing,
    Roadmap,
    Changelog,
    Contributing,
    License,
    Acknowledgments,
    AuthorInfo,
    Faq,
    Custom(String),
}

impl SectionKey {
    /// 所有内置章节，按默认顺序排列
    pub const BUILTIN: [SectionKey; 19] = [
        SectionKey::Title,
        SectionKey::Badges,
        SectionKey::Features,
        SectionKey::TechStack,
        SectionKey::Installation,
        SectionKey::Usage,
        SectionKey::ProjectStructure,
        SectionKey::ApiReference,
        SectionKey::Deployment,
        SectionKey::EnvironmentVariables,
        SectionKey::Screenshots,
        SectionKey::Testing,
        SectionKey::Roadmap,
        SectionKey::Changelog,
        SectionKey::Contributing,
        SectionKey::License,
        SectionKey::Acknowledgments,
        SectionKey::AuthorInfo,
        SectionKey::Faq,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SectionKey::Title => "title",
            SectionKey::Badges => "badges",
            SectionKey::Features => "features",
            SectionKey::TechStack => "techStack",
            SectionKey::Installation => "installation",
            SectionKey::Usage => "usage",
            SectionKey::ProjectStructure => "projectStructure",
            SectionKey::ApiReference => "apiReference",
            SectionKey::Deployment => "deployment",
            SectionKey::EnvironmentVariables => "environmentVariables",
            SectionKey::Screenshots => "screenshots",
            SectionKey::Testing => "testing",
            SectionKey::Roadmap => "roadmap",
            SectionKey::Changelog => "changelog",
            SectionKey::Contributing => "contributing",
            SectionKey::License => "license",
            SectionKey::Acknowledgments => "acknowledgments",
            SectionKey::AuthorInfo => "authorInfo",
            SectionKey::Faq => "faq",
            SectionKey::Custom(key) => key,
        }
    }

    /// 按字符串标识精确匹配内置章节，否则视为自定义章节
    pub fn from_id(id: &str) -> Self {
        Self::BUILTIN
            .iter()
            .find(|key| key.as_str() == id)
            .cloned()
            .unwrap_or_else(|| SectionKey::Custom(id.to_string()))
    }

    /// 宽松解析内置章节名（忽略大小写、空格、`-`和`_`），用于命令行与配置文件
    pub fn parse_builtin(name: &str) -> Option<Self> {
        let normalized = normalize(name);
        Self::BUILTIN
            .iter()
            .find(|key| normalize(key.as_str()) == normalized)
            .cloned()
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, SectionKey::Custom(_))
    }

    /// 内置章节的默认显示标题
    pub fn default_title(&self) -> &str {
        match self {
            SectionKey::Title => "Title & Description",
            SectionKey::Badges => "Badges",
            SectionKey::Features => "Features",
            SectionKey::TechStack => "🧰 Tech Stack",
            SectionKey::Installation => "Installation",
            SectionKey::Usage => "Usage",
            SectionKey::ProjectStructure => "📁 Project Structure",
            SectionKey::ApiReference => "📖 API Reference",
            SectionKey::Deployment => "Deployment",
            SectionKey::EnvironmentVariables => "⚙️ Environment Variables",
            SectionKey::Screenshots => "Screenshots",
            SectionKey::Testing => "Testing",
            SectionKey::Roadmap => "Roadmap",
            SectionKey::Changelog => "Changelog",
            SectionKey::Contributing => "Contributing",
            SectionKey::License => "License",
            SectionKey::Acknowledgments => "Acknowledgments",
            SectionKey::AuthorInfo => "⭐ Author Info",
            SectionKey::Faq => "FAQ",
            SectionKey::Custom(key) => key,
        }
    }

    /// 内置章节默认是否启用
    pub fn enabled_by_default(&self) -> bool {
        matches!(
            self,
            SectionKey::Title
                | SectionKey::Badges
                | SectionKey::Features
                | SectionKey::TechStack
                | SectionKey::Installation
                | SectionKey::Usage
                | SectionKey::ProjectStructure
                | SectionKey::Contributing
                | SectionKey::License
                | SectionKey::Custom(_)
        )
    }

    /// 内置章节的模板文本
    pub fn template(&self) -> &'static str {
        match self {
            SectionKey::Title | SectionKey::Custom(_) => "",
            SectionKey::Badges => templates::BADGES,
            SectionKey::Features => templates::FEATURES,
            SectionKey::TechStack => templates::TECH_STACK,
            SectionKey::Installation => templates::INSTALLATION,
            SectionKey::Usage => templates::USAGE,
            SectionKey::ProjectStructure => templates::PROJECT_STRUCTURE,
            SectionKey::ApiReference => templates::API_REFERENCE,
            SectionKey::Deployment => templates::DEPLOYMENT,
            SectionKey::EnvironmentVariables => templates::ENVIRONMENT_VARIABLES,
            SectionKey::Screenshots => templates::SCREENSHOTS,
            SectionKey::Testing => templates::TESTING,
            SectionKey::Roadmap => templates::ROADMAP,
            SectionKey::Changelog => templates::CHANGELOG,
            SectionKey::Contributing => templates::CONTRIBUTING,
            SectionKey::License => templates::LICENSE,
            SectionKey::Acknowledgments => templates::ACKNOWLEDGMENTS,
            SectionKey::AuthorInfo => templates::AUTHOR_INFO,
            SectionKey::Faq => templates::FAQ,
        }
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for SectionKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for SectionKey {
    fn from(id: String) -> Self {
        SectionKey::from_id(&id)
    }
}

impl From<SectionKey> for String {
    fn from(key: SectionKey) -> Self {
        key.as_str().to_string()
    }
}

/// 文档中的一个章节
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// 章节键，在注册表内唯一
    pub key: SectionKey,

    /// 显示标题，可包含装饰性字符
    pub title: String,

    /// 是否参与文档输出
    pub enabled: bool,

    /// 模板文本，内容为空时作为回退，也是重置的目标
    pub template: String,

    /// 当前内容
    pub content: String,
}

impl Section {
    pub fn new(key: SectionKey, title: impl Into<String>, enabled: bool, template: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
            enabled,
            template: template.into(),
            content: String::new(),
        }
    }

    /// 使用内置默认值创建章节
    pub fn builtin(key: SectionKey) -> Self {
        let title = key.default_title().to_string();
        let enabled = key.enabled_by_default();
        let template = key.template();
        Self::new(key, title, enabled, template)
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// 实际显示的内容：当前内容为空时回退到模板
    pub fn effective_content(&self) -> &str {
        if self.content.is_empty() {
            &self.template
        } else {
            &self.content
        }
    }
}

/// 内置章节的模板文本
pub mod templates {
    pub const BADGES: &str = "[![MIT License](https://img.shields.io/badge/License-MIT-green.svg)](https://choosealicense.com/licenses/mit/)
[![GPLv3 License](https://img.shields.io/badge/License-GPL%20v3-yellow.svg)](https://opensource.org/licenses/)
[![AGPL License](https://img.shields.io/badge/license-AGPL-blue.svg)](http://www.gnu.org/licenses/agpl-3.0)";

    pub const FEATURES: &str = "- ✨ **Feature 1**: Description of the first amazing feature
- 🚀 **Feature 2**: Description of the second powerful feature  
- 🎯 **Feature 3**: Description of the third useful feature
- 💡 **Feature 4**: Description of the fourth innovative feature";

    pub const TECH_STACK: &str = "**Client:** React, Redux, TailwindCSS

**Server:** Node, Express

**Database:** MongoDB";

    pub const INSTALLATION: &str = "git clone https://github.com/yourusername/project-name.git
cd project-name
npm install
npm run dev";

    pub const USAGE: &str = "```javascript
import { ProjectName } from 'project-name'

function App() {
  return (
    <div className=\"App\">
      <ProjectName />
    </div>
  )
}
```";

    pub const PROJECT_STRUCTURE: &str = "```
project-name/
├── README.md
├── package.json
├── src/
│   ├── components/
│   ├── pages/
│   ├── utils/
│   └── App.js
├── public/
│   └── index.html
└── docs/
    └── API.md
```";

    pub const API_REFERENCE: &str = "#### Get all items

```http
  GET /api/items
```

| Parameter | Type     | Description                |
| :-------- | :------- | :------------------------- |
| `api_key` | `string` | **Required**. Your API key |

#### Get item

```http
  GET /api/items/${id}
```

| Parameter | Type     | Description                       |
| :-------- | :------- | :-------------------------------- |
| `id`      | `string` | **Required**. Id of item to fetch |";

    pub const DEPLOYMENT: &str = "To deploy this project run

```bash
  npm run build
```";

    pub const LICENSE: &str = "MIT";

    pub const CONTRIBUTING: &str = "Contributions are always welcome!

See `contributing.md` for ways to get started.

Please adhere to this project's `code of conduct`.";

    pub const ACKNOWLEDGMENTS: &str = " - [Awesome Readme Templates](https://awesomeopensource.com/project/elangosundar/awesome-README-templates)
 - [Awesome README](https://github.com/matiassingers/awesome-readme)
 - [How to write a Good readme](https://bulldogjob.com/news/449-how-to-write-a-good-readme-for-your-github-project)";

    pub const SCREENSHOTS: &str =
        "![App Screenshot](https://via.placeholder.com/468x300?text=App+Screenshot+Here)";

    pub const ENVIRONMENT_VARIABLES: &str = "To run this project, you will need to add the following environment variables to your .env file

`API_KEY`

`ANOTHER_API_KEY`";

    pub const AUTHOR_INFO: &str = "## 🚀 About Me
I'm a full stack developer...

## 🔗 Links
[![portfolio](https://img.shields.io/badge/my_portfolio-000?style=for-the-badge&logo=ko-fi&logoColor=white)](https://katherinempeterson.com/)
[![linkedin](https://img.shields.io/badge/linkedin-0A66C2?style=for-the-badge&logo=linkedin&logoColor=white)](https://www.linkedin.com/in/username)
[![twitter](https://img.shields.io/badge/twitter-1DA1F2?style=for-the-badge&logo=twitter&logoColor=white)](https://twitter.com/username)";

    pub const FAQ: &str = "#### Question 1

Answer 1

#### Question 2

Answer 2";

    pub const ROADMAP: &str = "- [x] Add Changelog
- [x] Add back to top links
- [ ] Add Additional Templates w/ Examples
- [ ] Add \"components\" document to easily copy & paste sections of the readme
- [ ] Multi-language Support
    - [ ] Chinese
    - [ ] Spanish";

    pub const CHANGELOG: &str = "## [1.0.0] - 2023-01-01
### Added
- Initial release

## [0.1.0] - 2022-12-01
### Added
- Project setup";

    pub const TESTING: &str = "To run tests, run the following command

```bash
  npm run test
```";
}
