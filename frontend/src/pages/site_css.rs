/// Layout shared by both sites. Section-specific styles live with their
/// components.
pub const SITE_CSS: &str = r#"
    body {
        margin: 0;
        background: #10160f;
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .site {
        overflow-x: hidden;
    }
    .page-section {
        position: relative;
        min-height: 100vh;
        height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
    }
    .page-section--free {
        height: auto;
        overflow: visible;
        padding: 6rem 0 2rem;
    }
    .section-inner {
        max-width: 1100px;
        width: 100%;
        padding: 0 2rem;
        opacity: 0.2;
        transform: translateY(30px);
        transition: opacity 0.8s ease, transform 0.8s ease;
    }
    .page-section.in-view .section-inner,
    .page-section--free .section-inner {
        opacity: 1;
        transform: translateY(0);
    }
    .page-section h2 {
        font-size: clamp(2rem, 4vw, 3.2rem);
        margin-bottom: 2.5rem;
    }
    .hero-background {
        position: absolute;
        inset: 0;
        background-image: url('/assets/kitchen.jpg');
        background-size: cover;
        background-position: center;
        opacity: 0.35;
        z-index: -1;
    }
    .hero-content {
        text-align: center;
        max-width: 760px;
        padding: 0 2rem;
    }
    .hero-content h1 {
        font-size: clamp(2.4rem, 6vw, 4.5rem);
        line-height: 1.05;
        margin-bottom: 1.5rem;
    }
    .hero-content p {
        font-size: 1.2rem;
        color: rgba(255, 255, 255, 0.8);
        margin-bottom: 2.5rem;
    }
    .hero-cta, .ghost-cta {
        padding: 1rem 2rem;
        font-size: 1.05rem;
        border-radius: 999px;
        cursor: pointer;
        transition: transform 0.2s ease;
    }
    .hero-cta {
        background: #8BC34A;
        border: none;
        color: #10160f;
    }
    .ghost-cta {
        background: transparent;
        border: 1px solid rgba(255, 255, 255, 0.4);
        color: #fff;
    }
    .hero-cta:hover, .ghost-cta:hover {
        transform: translateY(-2px);
    }
    .scroll-hint {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        transform: translateX(-50%);
        font-size: 0.8rem;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.5);
    }
    .stat-grid, .work-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .stat {
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        color: rgba(255, 255, 255, 0.75);
    }
    .stat-value {
        font-size: clamp(2rem, 4vw, 3rem);
        font-weight: 700;
        color: #8BC34A;
    }
    .work-card {
        background: rgba(255, 255, 255, 0.04);
        border: 1px solid rgba(139, 195, 74, 0.15);
        border-radius: 16px;
        padding: 2rem;
    }
    .contact-buttons {
        display: flex;
        gap: 1rem;
        flex-wrap: wrap;
        margin: 2rem 0 4rem;
    }
    .site-footer {
        display: flex;
        justify-content: space-between;
        padding-top: 2rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        color: rgba(255, 255, 255, 0.5);
    }
    .site-footer a {
        color: #8BC34A;
    }
    .asset-loading {
        position: fixed;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .loading-spinner {
        display: inline-block;
        width: 20px;
        height: 20px;
        border: 3px solid rgba(255,255,255,.3);
        border-radius: 50%;
        border-top-color: #fff;
        animation: spin 1s ease-in-out infinite;
    }
    @keyframes spin { to { transform: rotate(360deg); } }
    @media (max-width: 768px) {
        .page-section {
            height: auto;
            min-height: 100vh;
            padding: 4rem 0;
        }
        .stat-grid, .work-grid {
            grid-template-columns: 1fr;
        }
    }
"#;
