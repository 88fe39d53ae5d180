use dioxus::prelude::*;

use crate::components::{ContactItem, SectionCard, TimelineEntry};
use crate::core::language::Language;
use crate::core::sections::{ABOUT, EDUCATION, EXPERIENCE, PROJECTS, STACK};

const LANG: Language = Language::Korean;

/// Korean résumé. Authored independently of the English tree; keep the
/// wording exactly as provided.
#[component]
pub fn KoreanContent() -> Element {
    rsx! {
        header { class: "profile",
            div { class: "profile__text",
                h1 { class: "profile__name", "프리랜서 개발자 이은진" }
                br {}
                div { class: "profile__contacts",
                    ContactItem {
                        label: "Email",
                        value: "smallsteadycodes@gmail.com",
                        href: "mailto:smallsteadycodes@gmail.com",
                    }
                    ContactItem {
                        label: "Blog",
                        value: "dog-foot-story.tistory.com",
                        href: "https://dog-foot-story.tistory.com",
                    }
                }
            }
            div { class: "profile__photo-frame",
                img {
                    class: "profile__photo",
                    src: "/profile.jpg",
                    alt: "이은진 프로필",
                    width: "104",
                    height: "104",
                }
            }
        }

        SectionCard { section: &ABOUT, language: LANG,
            div { class: "summary",
                p { "안녕하세요. 프리랜서 개발자 이은진입니다." }
                p { "저는 5년 이상의 Java & Python 기반 ERP·공공 시스템 개발 경험을 바탕으로," }
                p { "고객이 필요로 하는 서비스의 복잡한 비즈니스 로직을 빠르고 안정적으로 구현하는 것을 추구합니다." }
                br {}
                p { "실제로 트랜잭션 분할 및 SQL 튜닝을 통해 ERP 주문·출하 처리 성능을 80% 이상 단축하고," }
                p { "공공기관 예산시스템의 웹 전환과 자동화 프로세스 구축으로 업무 효율을 크게 향상시킨 경험이 있습니다." }
                br {}
                p {
                    "다양한 도메인 경험을 바탕으로 현업 사용자가 "
                    b { "‘진짜 필요로 하는 기능’" }
                    "을 설계하고 구현합니다."
                }
                p { "프로젝트를 진행할 때는 명확한 커뮤니케이션과 책임 있는 일정 관리로 함께 일하는 파트너에게 신뢰받는 개발자가 되기 위해 노력합니다." }
            }
        }

        SectionCard { section: &STACK, language: LANG,
            div { class: "stack",
                div {
                    h3 { class: "stack__group", "Backend & Frameworks" }
                    p { "Java, Python, Spring Boot, Spring Batch, Django" }
                }
                div {
                    h3 { class: "stack__group", "Database & Infra" }
                    p { "Oracle, MySQL, MariaDB, AWS, Docker, Linux, Jenkins, NGINX" }
                }
                div {
                    h3 { class: "stack__group", "Auth & Tools" }
                    p { "JWT, OAuth2, Git, IntelliJ IDEA, PyCharm, WebSquare, Postman, Kibana" }
                }
            }
        }

        SectionCard { section: &EXPERIENCE, language: LANG,
            div { class: "entries entries--tight",
                TimelineEntry {
                    title: "더존비즈온 | SCM 개발 Unit | 주임연구원",
                    period: "2021.11 – 2025.07 (3년 9개월)",
                    subtitle: "기업용 솔루션 전문기업 · 풀스택 개발 및 운영",
                }
                TimelineEntry {
                    title: "CODAA | 기업부설연구소 | 연구원",
                    period: "2021.03 – 2021.10 (8개월)",
                    subtitle: "녹색건축 컨설팅 전문기업 · 설계 및 풀스택 개발",
                }
                TimelineEntry {
                    title: "아이티아이즈 | 공금융사업부 | 주임",
                    period: "2019.12 – 2021.01 (1년 2개월)",
                    subtitle: "금융 솔루션 전문기업 · 프론트엔드 개발",
                }
            }
        }

        SectionCard { section: &PROJECTS, language: LANG,
            div { class: "entries entries--loose",
                TimelineEntry {
                    title: "더존비즈온 ERP SCM 시스템",
                    period: "2021.11 – 2025.07",
                    subtitle: "Java · SpringBoot · Oracle · MariaDB · GitLab · JavaScript · Confluence · Jenkins · Kibana",
                    ul { class: "entry__points",
                        li {
                            "고객사별 물류 프로세스 커스터마이징: "
                            b { "OMS/WMS/MES 연동" }
                            " 포함 복잡한 비즈니스 로직 처리"
                        }
                        li { "다양한 주문 채널 통합: I/F 송수신, Batch Job, 그룹웨어, 엑셀 업로드" }
                        li { "대용량 주문·재고·수불 처리: 트랜잭션 분할 · 인덱스 · SQL 튜닝 · 페이징 적용 (조회 기준 30분 → 2분 30초)" }
                        li { "서비스 안정화: 예외처리 로직 개선, 에러메시지 공통화, 로그 모니터링 (월 평균 장애 4.75건 → 1.6건)" }
                        li { "AI 기반 자동 주문 추천·시각화·알림 서비스 구현, 다국어 적용, 개인정보 암복호화" }
                    }
                }
                TimelineEntry {
                    title: "B2B 이커머스 플랫폼 (MRO마켓)",
                    period: "2022.11 – 2023.01",
                    subtitle: "JWT · Spring Batch",
                    ul { class: "entry__points",
                        li { "ERP ↔ 이커머스 플랫폼 간 상품 동기화 및 주문·배송·결제 정보 연동 신규 구축" }
                        li { "JWT 인증 및 HTTP 통신 이슈 해결로 연동 안정성 확보" }
                    }
                }
                TimelineEntry {
                    title: "중소벤처기업부 창업성장기술개발사업 (녹색건축플랫폼)",
                    period: "2021.03 – 2021.10",
                    subtitle: "Python · Django · MySQL · NGINX · AWS · Linux · OAuth2",
                    ul { class: "entry__points",
                        li { "건축법 뷰어: 국가법령정보 공동활용 Open API 기반의 실사용 서비스 구현" }
                        li { "에너지 평가 모듈: 클라우드 인프라 구축 및 소셜 로그인 구현" }
                    }
                }
                TimelineEntry {
                    title: "기획재정부 차세대 디지털예산회계시스템 (dBrain+)",
                    period: "2020.01 – 2021.01",
                    subtitle: "Java · eGovFramework · Oracle · WebSquare",
                    ul { class: "entry__points",
                        li { "연간 500조 원 규모 예산 운용 시스템의 예산편성 파트 담당 개발" }
                        li { "AS-IS 분석을 통한 TO-BE 설계 산출물 작성 및 기능 구현" }
                        li { "Clip Report 기반 단년도/중기/추경 예산 리포트 자동 생성 프로세스 구축" }
                        li { "예산요구서 작성 및 심의 프로세스 전산화, 웹한글기안기 연동 최초 적용" }
                    }
                }
            }
        }

        SectionCard { section: &EDUCATION, language: LANG,
            div { class: "education",
                div {
                    h3 { class: "education__title", "동덕여자대학교 · 정보통계학과" }
                    p { class: "education__detail", "2013 – 2020 (졸업)" }
                }
                div {
                    h3 { class: "education__title", "자격증" }
                    ul { class: "education__certs",
                        li { "정보처리기사 — 한국산업인력공단 (2019.08)" }
                        li { "데이터분석 준전문가(ADsP) — 한국데이터산업진흥원 (2019.07)" }
                    }
                }
            }
        }
    }
}
