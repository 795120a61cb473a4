//! Documentation index.

use serde::Serialize;

/// Metadata for one documentation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocMeta {
    /// Unique key used in URLs.
    pub slug: &'static str,
    /// Display title.
    pub title: &'static str,
    /// One-line summary.
    pub description: &'static str,
    /// Markdown file backing the page.
    pub file: &'static str,
}

const DOCS: [DocMeta; 11] = [
    DocMeta {
        slug: "installation",
        title: "01. 安装和设置指南",
        description: "从零开始搭建 Next.js 开发环境",
        file: "01-installation.md",
    },
    DocMeta {
        slug: "routing",
        title: "02. 路由系统详解",
        description: "深入了解 Next.js App Router",
        file: "02-routing.md",
    },
    DocMeta {
        slug: "data-fetching",
        title: "03. 数据获取策略",
        description: "掌握 SSG、SSR、ISR 等数据获取模式",
        file: "03-data-fetching.md",
    },
    DocMeta {
        slug: "api-routes",
        title: "04. API 路由开发",
        description: "创建和管理 API 端点",
        file: "04-api-routes.md",
    },
    DocMeta {
        slug: "components",
        title: "05. 组件开发指南",
        description: "服务端组件与客户端组件",
        file: "05-components.md",
    },
    DocMeta {
        slug: "styling",
        title: "06. 样式和主题",
        description: "Tailwind CSS、CSS Modules 等样式方案",
        file: "06-styling.md",
    },
    DocMeta {
        slug: "optimization",
        title: "07. 性能优化",
        description: "图片、字体、代码分割等优化技术",
        file: "07-optimization.md",
    },
    DocMeta {
        slug: "deployment",
        title: "08. 部署指南",
        description: "多种部署方案详解",
        file: "08-deployment.md",
    },
    DocMeta {
        slug: "best-practices",
        title: "09. 最佳实践",
        description: "Next.js 开发最佳实践和代码规范",
        file: "09-best-practices.md",
    },
    DocMeta {
        slug: "faq",
        title: "10. 常见问题",
        description: "FAQ 和疑难解答",
        file: "10-faq.md",
    },
    DocMeta {
        slug: "usage",
        title: "附录：使用与部署手册",
        description: "包含构建、部署、环境变量等详细说明",
        file: "usage-guide.md",
    },
];

/// Lookup over the documentation metadata.
#[derive(Debug, Clone, Copy)]
pub struct DocsIndex {
    entries: &'static [DocMeta],
}

impl DocsIndex {
    /// Index over the built-in documentation list.
    #[must_use]
    pub fn builtin() -> Self {
        Self { entries: &DOCS }
    }

    /// Every entry, in table order.
    #[must_use]
    pub fn all(&self) -> &'static [DocMeta] {
        self.entries
    }

    /// Find the entry with the given slug.
    ///
    /// A miss is not an error; callers decide what "absent" means to them.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&'static DocMeta> {
        self.entries.iter().find(|doc| doc.slug == slug)
    }
}

impl Default for DocsIndex {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Look up a page in the built-in index.
#[must_use]
pub fn get_doc_meta(slug: &str) -> Option<&'static DocMeta> {
    DocsIndex::builtin().get(slug)
}
