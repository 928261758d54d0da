//! Prompt construction for the profile analysis request.
//!
//! The report is requested in Latvian with a fixed markdown outline so the
//! rendered result always has the same five sections.

const REPORT_OUTLINE: &str = r#"**Analīzes uzdevumi:**
1.  **TikTok profila saturs:** Izpēti publiski pieejamo informāciju (bio, video tēmas, apraksti, komentāri).
2.  **Propagandas pārbaude:** Pievērs īpašu uzmanību, vai saturs atbilst Kremļa propagandai vai izplata Krievijas naratīvus. Esi objektīvs un pamato savus secinājumus ar piemēriem no profila, ja tādus atrodi.
3.  **Papildu informācijas meklēšana:** Izmantojot personas vārdu (ja zināms vai noskaidrots) un lietotājvārdu, meklē informāciju par šo personu Google un citās publiskās platformās (sociālie tīkli, ziņu raksti).
4.  **Strukturēts ziņojums:** Sagatavo atbildi latviešu valodā, izmantojot sekojošu Markdown struktūru:

### **Padziļinātā profila analīze**

**1. Kopsavilkums:**
[Īss kopsavilkums par konta saturu, tā mērķauditoriju un galveno vēstījumu.]

**2. Galvenās tēmas:**
*   [Tēma 1]
*   [Tēma 2]
*   [Tēma 3 vai vairāk]

**3. Autora profils (pēc TikTok datiem):**
[Apraksts par personas iespējamo nodarbošanos, aizraušanos vai raksturojumu, kas izriet TIKAI no TikTok satura.]

**4. Pārbaude par propagandu:**
**Secinājums:** [Skaidrs secinājums: "Nav novērotas pazīmes", "Iespējamas pazīmes", "Skaidri redzamas pazīmes".]
**Pamatojums:** [Detalizēts paskaidrojums un piemēri, ja pazīmes ir atrastas. Ja nav, tad "Profila saturā netika atrastas pazīmes, kas liecinātu par Kremļa propagandas izplatīšanu."]

**5. Papildu informācija (no citiem avotiem):**
[Informācija, kas atrasta par personu ārpus TikTok. Ja nekas nav atrasts, norādi to: "Ārpus TikTok platformas publiski pieejama informācija par šo personu netika atrasta."]"#;

/// Join the non-empty, trimmed name parts with a single space.
pub fn full_name(first_name: &str, last_name: &str) -> String {
    [first_name.trim(), last_name.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the analysis prompt for an already validated profile URL.
pub fn build_prompt(profile_url: &str, first_name: &str, last_name: &str) -> String {
    let name = full_name(first_name, last_name);
    format!(
        "Lūdzu, veic padziļinātu analīzi par TikTok profilu: {url}.\n\
         Ja ir zināms, personas vārds ir {name}. Ja vārds nav dots, mēģini to noskaidrot no profila.\n\
         \n\
         {REPORT_OUTLINE}",
        url = profile_url.trim(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_url_and_both_names() {
        let prompt = build_prompt("tiktok.com/@user", "Jane", "Doe");
        assert!(prompt.contains("tiktok.com/@user"));
        assert!(prompt.contains("personas vārds ir Jane Doe."));
    }

    #[test]
    fn missing_name_leaves_lookup_instruction() {
        let prompt = build_prompt("tiktok.com/@user", "  ", "");
        assert!(prompt.contains("personas vārds ir ."));
        assert!(prompt.contains("mēģini to noskaidrot no profila"));
    }

    #[test]
    fn single_name_part_has_no_stray_space() {
        assert_eq!(full_name(" Jane ", ""), "Jane");
        assert_eq!(full_name("", "Doe"), "Doe");
    }

    #[test]
    fn prompt_requests_the_fixed_report_outline() {
        let prompt = build_prompt("tiktok.com/@user", "", "");
        assert!(prompt.contains("### **Padziļinātā profila analīze**"));
        for section in ["**1. ", "**2. ", "**3. ", "**4. ", "**5. "] {
            assert!(prompt.contains(section), "missing section {section}");
        }
    }
}
