//! Technology badge lookup: maps free-text technology names from the
//! upstream ("React", "node.js", "Spring Boot") to an icon identifier and a
//! colour class the presentation layer renders.
//!
//! Resolution order:
//! 1. Custom icons (exact lowercase key), which carry their own colour
//! 2. Aliases (exact lowercase key)
//! 3. Aliases and catalogue entries compared on the normalized key
//! 4. `TechIcon::UNKNOWN`

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconLibrary {
    Fa,
    Si,
    Bi,
    Io,
    Bs,
    Md,
    Ai,
    Gi,
}

/// Identifier of an icon component in one of the icon libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechIcon {
    pub library: IconLibrary,
    pub name: &'static str,
}

impl TechIcon {
    pub const UNKNOWN: TechIcon = TechIcon::new(IconLibrary::Bs, "BsQuestionLg");

    const fn new(library: IconLibrary, name: &'static str) -> Self {
        Self { library, name }
    }
}

pub const DEFAULT_COLOR: &str = "text-blue-500";
pub const UNKNOWN_COLOR: &str = "text-gray-400";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechBadge {
    pub name: String,
    pub icon: TechIcon,
    pub color_class: &'static str,
    /// Full class list for the icon element.
    pub class_name: String,
    pub known: bool,
}

use IconLibrary::{Ai, Bi, Bs, Fa, Gi, Io, Md, Si};

const fn icon(library: IconLibrary, name: &'static str) -> TechIcon {
    TechIcon::new(library, name)
}

/// Technologies with a hand-picked icon and colour.
const CUSTOM_ICONS: &[(&str, TechIcon, &str)] = &[
    ("rest", icon(Fa, "FaCloud"), "text-blue-500"),
    ("rest api", icon(Fa, "FaCloud"), "text-blue-500"),
    ("restful", icon(Fa, "FaCloud"), "text-blue-500"),
    ("soap", icon(Md, "MdCloudQueue"), "text-indigo-600"),
    ("soap api", icon(Md, "MdCloudQueue"), "text-indigo-600"),
    ("api", icon(Ai, "AiOutlineApi"), "text-purple-500"),
    ("microservices", icon(Bs, "BsBoxes"), "text-teal-500"),
    ("microservicios", icon(Bs, "BsBoxes"), "text-teal-500"),
    ("monolith", icon(Bs, "BsBox"), "text-gray-600"),
    ("serverless", icon(Ai, "AiOutlineCloudServer"), "text-yellow-500"),
    ("agile", icon(Md, "MdSpeed"), "text-green-500"),
    ("scrum", icon(Io, "IoPeople"), "text-blue-500"),
    ("kanban", icon(Bs, "BsKanban"), "text-orange-500"),
    ("testing", icon(Md, "MdBugReport"), "text-red-500"),
    ("unit testing", icon(Md, "MdCheckCircle"), "text-green-500"),
    ("e2e", icon(Md, "MdRadar"), "text-purple-500"),
    ("emailjs", icon(Md, "MdEmail"), "text-red-500"),
    ("iot", icon(Io, "IoHardwareChip"), "text-green-600"),
    ("blockchain", icon(Fa, "FaCube"), "text-yellow-600"),
    ("machine learning", icon(Ai, "AiOutlineRobot"), "text-purple-600"),
    ("ml", icon(Ai, "AiOutlineRobot"), "text-purple-600"),
    ("ai", icon(Ai, "AiOutlineRobot"), "text-indigo-600"),
    ("web3", icon(Si, "SiWeb3Dotjs"), "text-orange-500"),
    ("innovación en ciencia", icon(Gi, "GiChemicalDrop"), "text-green-500"),
    ("formación en ti", icon(Fa, "FaGraduationCap"), "text-blue-600"),
];

/// Common spellings of technologies, keyed by lowercase name.
const ALIASES: &[(&str, TechIcon)] = &[
    // Languages
    ("javascript", icon(Si, "SiJavascript")),
    ("typescript", icon(Si, "SiTypescript")),
    ("python", icon(Si, "SiPython")),
    ("java", icon(Fa, "FaJava")),
    ("c++", icon(Si, "SiCplusplus")),
    ("c", icon(Si, "SiC")),
    ("go", icon(Si, "SiGo")),
    ("golang", icon(Si, "SiGo")),
    ("rust", icon(Si, "SiRust")),
    ("php", icon(Si, "SiPhp")),
    ("kotlin", icon(Si, "SiKotlin")),
    ("swift", icon(Si, "SiSwift")),
    ("ruby", icon(Si, "SiRuby")),
    ("r", icon(Si, "SiR")),
    // Frontend
    ("react", icon(Fa, "FaReact")),
    ("react native", icon(Fa, "FaReact")),
    ("react toastify", icon(Fa, "FaReact")),
    ("react router", icon(Si, "SiReactrouter")),
    ("react router dom", icon(Si, "SiReactrouter")),
    ("redux", icon(Si, "SiRedux")),
    ("angular", icon(Fa, "FaAngular")),
    ("vue", icon(Fa, "FaVuejs")),
    ("vuejs", icon(Fa, "FaVuejs")),
    ("vue.js", icon(Fa, "FaVuejs")),
    ("html", icon(Fa, "FaHtml5")),
    ("html5", icon(Fa, "FaHtml5")),
    ("css", icon(Fa, "FaCss3Alt")),
    ("css3", icon(Fa, "FaCss3Alt")),
    ("tailwind", icon(Si, "SiTailwindcss")),
    ("tailwind css", icon(Si, "SiTailwindcss")),
    ("bootstrap", icon(Fa, "FaBootstrap")),
    ("sass", icon(Fa, "FaSass")),
    ("scss", icon(Fa, "FaSass")),
    ("jquery", icon(Si, "SiJquery")),
    ("vite", icon(Si, "SiVite")),
    ("webpack", icon(Si, "SiWebpack")),
    ("nextjs", icon(Si, "SiNextdotjs")),
    ("next.js", icon(Si, "SiNextdotjs")),
    ("nuxt", icon(Si, "SiNuxtdotjs")),
    ("nuxt.js", icon(Si, "SiNuxtdotjs")),
    ("svelte", icon(Si, "SiSvelte")),
    ("chakra ui", icon(Si, "SiChakraui")),
    ("ant design", icon(Si, "SiAntdesign")),
    // Backend
    ("nodejs", icon(Fa, "FaNodeJs")),
    ("node", icon(Fa, "FaNodeJs")),
    ("node.js", icon(Fa, "FaNodeJs")),
    ("express", icon(Si, "SiExpress")),
    ("expressjs", icon(Si, "SiExpress")),
    ("nestjs", icon(Si, "SiNestjs")),
    ("django", icon(Si, "SiDjango")),
    ("flask", icon(Si, "SiFlask")),
    ("laravel", icon(Fa, "FaLaravel")),
    ("spring", icon(Si, "SiSpring")),
    ("spring boot", icon(Bi, "BiLogoSpringBoot")),
    ("springboot", icon(Bi, "BiLogoSpringBoot")),
    ("fastapi", icon(Si, "SiFastapi")),
    ("ruby on rails", icon(Si, "SiRubyonrails")),
    ("rails", icon(Si, "SiRubyonrails")),
    // Databases
    ("mysql", icon(Si, "SiMysql")),
    ("postgresql", icon(Si, "SiPostgresql")),
    ("postgres", icon(Si, "SiPostgresql")),
    ("mongodb", icon(Si, "SiMongodb")),
    ("mongo", icon(Si, "SiMongodb")),
    ("redis", icon(Si, "SiRedis")),
    ("firebase", icon(Si, "SiFirebase")),
    ("supabase", icon(Si, "SiSupabase")),
    ("oracle", icon(Si, "SiOracle")),
    ("sqlite", icon(Si, "SiSqlite")),
    ("mariadb", icon(Si, "SiMariadb")),
    // Cloud & DevOps
    ("aws", icon(Fa, "FaAws")),
    ("amazon web services", icon(Fa, "FaAws")),
    ("docker", icon(Fa, "FaDocker")),
    ("kubernetes", icon(Si, "SiKubernetes")),
    ("k8s", icon(Si, "SiKubernetes")),
    ("vercel", icon(Si, "SiVercel")),
    ("netlify", icon(Si, "SiNetlify")),
    ("heroku", icon(Si, "SiHeroku")),
    ("render", icon(Si, "SiRender")),
    ("gcp", icon(Si, "SiGooglecloud")),
    ("google cloud", icon(Si, "SiGooglecloud")),
    // Tools & version control
    ("git", icon(Si, "SiGit")),
    ("github", icon(Fa, "FaGithub")),
    ("github actions", icon(Si, "SiGithubactions")),
    ("gitlab", icon(Si, "SiGitlab")),
    ("npm", icon(Si, "SiNpm")),
    ("yarn", icon(Si, "SiYarn")),
    ("pnpm", icon(Si, "SiPnpm")),
    ("postman", icon(Si, "SiPostman")),
    ("jira", icon(Si, "SiJira")),
    ("confluence", icon(Si, "SiConfluence")),
    ("trello", icon(Si, "SiTrello")),
    ("jenkins", icon(Si, "SiJenkins")),
    // Other
    ("graphql", icon(Si, "SiGraphql")),
    ("framer motion", icon(Si, "SiFramer")),
    ("framer", icon(Si, "SiFramer")),
    ("socket.io", icon(Si, "SiSocketdotio")),
    ("socketio", icon(Si, "SiSocketdotio")),
    ("wordpress", icon(Fa, "FaWordpress")),
    ("woocommerce", icon(Si, "SiWoocommerce")),
    ("prestashop", icon(Si, "SiPrestashop")),
];

/// Icons matched only by normalized key, for technologies that need no alias.
const CATALOGUE: &[(&str, TechIcon)] = &[
    ("linux", icon(Si, "SiLinux")),
    ("ubuntu", icon(Si, "SiUbuntu")),
    ("nginx", icon(Si, "SiNginx")),
    ("apache", icon(Si, "SiApache")),
    ("terraform", icon(Si, "SiTerraform")),
    ("ansible", icon(Si, "SiAnsible")),
    ("elasticsearch", icon(Si, "SiElasticsearch")),
    ("rabbitmq", icon(Si, "SiRabbitmq")),
    ("prisma", icon(Si, "SiPrisma")),
    ("jest", icon(Si, "SiJest")),
    ("cypress", icon(Si, "SiCypress")),
    ("selenium", icon(Si, "SiSelenium")),
    ("figma", icon(Si, "SiFigma")),
    ("slack", icon(Si, "SiSlack")),
    ("notion", icon(Si, "SiNotion")),
    ("dotnet", icon(Si, "SiDotnet")),
    ("arduino", icon(Si, "SiArduino")),
    ("raspberrypi", icon(Si, "SiRaspberrypi")),
    ("windows", icon(Fa, "FaWindows")),
    ("bash", icon(Si, "SiGnubash")),
    ("vscode", icon(Si, "SiVisualstudiocode")),
    ("powershell", icon(Si, "SiPowershell")),
];

const COLORS: &[(&str, &str)] = &[
    // Languages
    ("javascript", "text-yellow-400"),
    ("typescript", "text-blue-500"),
    ("python", "text-blue-500"),
    ("java", "text-red-700"),
    ("php", "text-indigo-500"),
    ("go", "text-cyan-400"),
    ("golang", "text-cyan-400"),
    ("rust", "text-orange-600"),
    ("c", "text-blue-600"),
    ("c++", "text-blue-700"),
    ("kotlin", "text-purple-600"),
    ("swift", "text-orange-500"),
    ("ruby", "text-red-600"),
    ("r", "text-blue-400"),
    // Frontend
    ("react", "text-cyan-400"),
    ("react native", "text-cyan-400"),
    ("react toastify", "text-cyan-400"),
    ("react router", "text-red-500"),
    ("react router dom", "text-red-500"),
    ("redux", "text-purple-600"),
    ("angular", "text-red-600"),
    ("vue", "text-green-500"),
    ("vuejs", "text-green-500"),
    ("vue.js", "text-green-500"),
    ("html", "text-orange-600"),
    ("html5", "text-orange-600"),
    ("css", "text-blue-500"),
    ("css3", "text-blue-500"),
    ("tailwind", "text-cyan-400"),
    ("tailwind css", "text-cyan-400"),
    ("bootstrap", "text-purple-600"),
    ("sass", "text-pink-500"),
    ("scss", "text-pink-500"),
    ("jquery", "text-blue-600"),
    ("vite", "text-purple-500"),
    ("webpack", "text-blue-500"),
    ("nextjs", "text-gray-900 dark:text-white"),
    ("next.js", "text-gray-900 dark:text-white"),
    ("nuxt", "text-green-500"),
    ("nuxt.js", "text-green-500"),
    ("svelte", "text-orange-500"),
    ("chakra ui", "text-teal-400"),
    ("ant design", "text-blue-500"),
    // Backend
    ("nodejs", "text-green-600"),
    ("node", "text-green-600"),
    ("node.js", "text-green-600"),
    ("express", "text-gray-700 dark:text-gray-300"),
    ("expressjs", "text-gray-700 dark:text-gray-300"),
    ("nestjs", "text-red-600"),
    ("django", "text-green-700"),
    ("flask", "text-gray-700 dark:text-gray-300"),
    ("laravel", "text-red-500"),
    ("spring", "text-green-600"),
    ("spring boot", "text-green-600"),
    ("springboot", "text-green-600"),
    ("fastapi", "text-teal-500"),
    ("ruby on rails", "text-red-700"),
    ("rails", "text-red-700"),
    // Databases
    ("mysql", "text-blue-600"),
    ("postgresql", "text-blue-700"),
    ("postgres", "text-blue-700"),
    ("mongodb", "text-green-600"),
    ("mongo", "text-green-600"),
    ("redis", "text-red-600"),
    ("firebase", "text-yellow-500"),
    ("supabase", "text-green-500"),
    ("oracle", "text-red-600"),
    ("sqlite", "text-blue-500"),
    ("mariadb", "text-blue-700"),
    // Cloud & DevOps
    ("aws", "text-orange-500"),
    ("amazon web services", "text-orange-500"),
    ("docker", "text-blue-500"),
    ("kubernetes", "text-blue-600"),
    ("k8s", "text-blue-600"),
    ("vercel", "text-gray-900 dark:text-white"),
    ("netlify", "text-teal-500"),
    ("heroku", "text-purple-600"),
    ("render", "text-purple-500"),
    ("gcp", "text-blue-500"),
    ("google cloud", "text-blue-500"),
    // Tools & version control
    ("git", "text-orange-600"),
    ("github", "text-gray-900 dark:text-white"),
    ("github actions", "text-blue-600"),
    ("gitlab", "text-orange-600"),
    ("npm", "text-red-600"),
    ("yarn", "text-blue-500"),
    ("pnpm", "text-yellow-500"),
    ("postman", "text-orange-500"),
    ("jira", "text-blue-600"),
    ("confluence", "text-blue-600"),
    ("trello", "text-blue-500"),
    ("jenkins", "text-red-600"),
    // Other
    ("graphql", "text-pink-600"),
    ("framer motion", "text-pink-500"),
    ("framer", "text-pink-500"),
    ("socket.io", "text-gray-900 dark:text-white"),
    ("socketio", "text-gray-900 dark:text-white"),
    ("wordpress", "text-blue-600"),
    ("woocommerce", "text-purple-600"),
    ("prestashop", "text-pink-600"),
];

/// Lowercases, trims and drops whitespace, dots and dashes:
/// `"Node.js"` and `"node js"` both become `"nodejs"`.
pub fn normalize(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.' && *c != '-')
        .collect()
}

fn lookup_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Icon for a technology name, if any table knows it.
pub fn find_icon(name: &str) -> Option<TechIcon> {
    let key = lookup_key(name);

    if let Some((_, icon, _)) = CUSTOM_ICONS.iter().find(|(k, _, _)| *k == key) {
        return Some(*icon);
    }
    if let Some((_, icon)) = ALIASES.iter().find(|(k, _)| *k == key) {
        return Some(*icon);
    }

    let normalized = normalize(name);
    if normalized.is_empty() {
        return None;
    }
    ALIASES
        .iter()
        .chain(CATALOGUE.iter())
        .find(|(k, _)| normalize(k) == normalized)
        .map(|(_, icon)| *icon)
}

/// Colour class for a technology; custom icons bring their own.
pub fn color_class(name: &str) -> &'static str {
    let key = lookup_key(name);
    CUSTOM_ICONS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, _, color)| *color)
        .or_else(|| COLORS.iter().find(|(k, _)| *k == key).map(|(_, c)| *c))
        .unwrap_or(DEFAULT_COLOR)
}

/// Everything the presentation layer needs to render one technology badge.
/// Unknown or blank names get the question-mark icon.
pub fn resolve_badge(name: &str) -> TechBadge {
    let (icon, color_class, known) = match find_icon(name) {
        Some(icon) => (icon, color_class(name), true),
        None => (TechIcon::UNKNOWN, UNKNOWN_COLOR, false),
    };

    TechBadge {
        name: name.trim().to_string(),
        icon,
        color_class,
        class_name: format!("size-5 {color_class}"),
        known,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_separators() {
        assert_eq!(normalize("  Node.js "), "nodejs");
        assert_eq!(normalize("Vue - JS"), "vuejs");
        assert_eq!(normalize("React Router DOM"), "reactrouterdom");
    }

    #[test]
    fn test_custom_icon_has_priority_and_own_color() {
        let badge = resolve_badge("REST API");
        assert_eq!(badge.icon, icon(Fa, "FaCloud"));
        assert_eq!(badge.color_class, "text-blue-500");
        assert!(badge.known);

        let badge = resolve_badge("Microservicios");
        assert_eq!(badge.icon.name, "BsBoxes");
        assert_eq!(badge.color_class, "text-teal-500");
    }

    #[test]
    fn test_alias_lookup_is_case_insensitive() {
        let badge = resolve_badge("Django");
        assert_eq!(badge.icon, icon(Si, "SiDjango"));
        assert_eq!(badge.color_class, "text-green-700");
        assert_eq!(badge.class_name, "size-5 text-green-700");
    }

    #[test]
    fn test_normalized_fallback_matches_alias_spelling_variants() {
        assert_eq!(find_icon("Node JS"), Some(icon(Fa, "FaNodeJs")));
        assert_eq!(find_icon("Socket-IO"), Some(icon(Si, "SiSocketdotio")));
        assert_eq!(find_icon("Tailwind-CSS"), Some(icon(Si, "SiTailwindcss")));
    }

    #[test]
    fn test_catalogue_entry_uses_default_color() {
        let badge = resolve_badge("Terraform");
        assert_eq!(badge.icon, icon(Si, "SiTerraform"));
        assert_eq!(badge.color_class, DEFAULT_COLOR);
    }

    #[test]
    fn test_unknown_and_blank_names_fall_back() {
        for name in ["Cobol-ish Thing", "", "   "] {
            let badge = resolve_badge(name);
            assert_eq!(badge.icon, TechIcon::UNKNOWN);
            assert_eq!(badge.color_class, UNKNOWN_COLOR);
            assert!(!badge.known);
        }
    }

    #[test]
    fn test_icon_serializes_library_lowercase() {
        let value = serde_json::to_value(resolve_badge("Rust")).unwrap();
        assert_eq!(value["icon"]["library"], "si");
        assert_eq!(value["icon"]["name"], "SiRust");
        assert_eq!(value["color_class"], "text-orange-600");
    }
}
